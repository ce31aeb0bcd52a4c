//! Rendering of resolved descendants into template text.

use classgen_core::{subclasses_of, ClassHierarchy};

/// One `#include <...>` line per descendant of `class_name`.
pub fn render_include_lines(hierarchy: &ClassHierarchy, class_name: &str) -> Vec<String> {
    subclasses_of(hierarchy, class_name)
        .into_iter()
        .map(|info| format!("#include <{}>\n", info.include_path))
        .collect()
}

/// Descendant class names joined with commas, without trailing separator or newline.
pub fn render_class_list(hierarchy: &ClassHierarchy, class_name: &str) -> String {
    subclasses_of(hierarchy, class_name)
        .into_iter()
        .map(|info| info.class_name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
