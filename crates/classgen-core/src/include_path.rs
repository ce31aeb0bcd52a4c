//! Include path resolution for generated headers.

use std::borrow::Cow;
use std::path::{Component, Path};

/// Directory names at which an include path starts.
pub const ROOT_MARKERS: [&str; 2] = ["src", "tests"];

/// Path fragment starting at the last `src` or `tests` segment.
///
/// `/repo/src/shogun/foo/bar.h` becomes `src/shogun/foo/bar.h`.
pub fn resolve_include_path(path: &Path) -> String {
    resolve_include_path_with(path, &ROOT_MARKERS)
}

/// Same as [`resolve_include_path`] with a custom set of root markers.
///
/// Without any marker the full list of segments is returned. Root and
/// prefix components are never part of the result.
pub fn resolve_include_path_with(path: &Path, markers: &[&str]) -> String {
    let segments: Vec<Cow<'_, str>> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            Component::ParentDir => Some(Cow::Borrowed("..")),
            _ => None,
        })
        .collect();

    let start = segments
        .iter()
        .rposition(|segment| markers.iter().any(|marker| *marker == *segment))
        .unwrap_or(0);

    segments[start..].join("/")
}
