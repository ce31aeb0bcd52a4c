//! # Classgen Core
//!
//! Class hierarchy model and descendant resolution.
//!
//! The hierarchy is loaded once from a JSON map and then only read:
//! every resolver takes it by shared reference.

pub mod error;
pub mod hierarchy;
pub mod include_path;

pub use error::{ClassgenError, ClassgenResult};
pub use hierarchy::{load_hierarchy, parse_hierarchy, subclasses_of, ClassHierarchy, ClassInfo};
pub use include_path::{resolve_include_path, resolve_include_path_with, ROOT_MARKERS};
