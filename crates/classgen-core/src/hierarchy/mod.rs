//! Class hierarchy loading and descendant resolution.

pub mod model;

pub use model::{ClassHierarchy, ClassInfo};

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ClassgenError, ClassgenResult};

/// Load the serialized hierarchy map from disk.
pub fn load_hierarchy(path: &Path) -> ClassgenResult<ClassHierarchy> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ClassgenError::HierarchyNotFound(path.display().to_string()),
        _ => ClassgenError::Io(e),
    })?;

    let hierarchy = parse_hierarchy(&content)?;
    debug!(classes = hierarchy.len(), path = %path.display(), "Loaded class hierarchy");
    Ok(hierarchy)
}

/// Parse a hierarchy map from its JSON text.
pub fn parse_hierarchy(json: &str) -> ClassgenResult<ClassHierarchy> {
    Ok(serde_json::from_str(json)?)
}

/// All transitive descendants of `class_name`, depth-first pre-order.
///
/// Siblings keep their stored order and each child is followed by its own
/// descendants before the next sibling. Unknown classes yield nothing.
/// A subclass that is already on the current path is skipped, so a cyclic
/// map still terminates.
pub fn subclasses_of<'a>(hierarchy: &'a ClassHierarchy, class_name: &str) -> Vec<&'a ClassInfo> {
    let Some(root) = hierarchy.get(class_name) else {
        return Vec::new();
    };

    let mut descendants = Vec::new();
    // Current path from the root, each with the index of its next child.
    let mut stack: Vec<(&'a ClassInfo, usize)> = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let (parent, index) = *frame;
        frame.1 += 1;

        let Some(child_name) = parent.subclasses.get(index) else {
            stack.pop();
            continue;
        };

        let Some(child) = hierarchy.get(child_name) else {
            warn!(
                class = %parent.class_name,
                subclass = %child_name,
                "Subclass missing from hierarchy"
            );
            continue;
        };

        // Entries are compared by identity: distinct keys may share a class_name.
        if stack.iter().any(|(ancestor, _)| std::ptr::eq(*ancestor, child)) {
            warn!(
                class = %parent.class_name,
                subclass = %child_name,
                "Cycle in class hierarchy, skipping"
            );
            continue;
        }

        descendants.push(child);
        stack.push((child, 0));
    }

    descendants
}
