//! # Classgen Codegen
//!
//! Expands `%subclasses_of(X)` and `%include_subclasses_of(X)` directives
//! in template files using a loaded class hierarchy.

pub mod directive;
pub mod processor;
pub mod render;
pub mod template;

pub use directive::{scan_line, DirectiveKind, DirectiveMatch, LineScan};
pub use processor::{
    expand_file, expand_files, pair_files, read_template, split_arguments, write_generated,
    ExpandConfig, GeneratedFile, DEFAULT_EXCLUDE_MARKER,
};
pub use render::{render_class_list, render_include_lines};
pub use template::{expand_template, Expansion};
