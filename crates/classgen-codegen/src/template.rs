//! Line-by-line expansion of a template source.

use classgen_core::{ClassHierarchy, ClassgenError, ClassgenResult};
use tracing::debug;

use crate::directive::{scan_line, DirectiveKind, DirectiveMatch, LineScan};
use crate::render::{render_class_list, render_include_lines};

/// Expanded template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub content: String,
    /// Number of directives that were replaced.
    pub directive_count: usize,
}

/// Expand every directive in `source`.
///
/// Lines keep their terminators. `source_name` is only used in error
/// messages.
pub fn expand_template(
    hierarchy: &ClassHierarchy,
    source_name: &str,
    source: &str,
) -> ClassgenResult<Expansion> {
    let mut content = String::with_capacity(source.len());
    let mut directive_count = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        match scan_line(line) {
            LineScan::Plain => content.push_str(line),
            LineScan::Directive(directive) => {
                debug!(
                    file = source_name,
                    line = index + 1,
                    kind = %directive.kind,
                    class = directive.class_name,
                    "Expanding directive"
                );
                expand_directive(hierarchy, &directive, &mut content);
                directive_count += 1;
            }
            LineScan::Malformed(kind) => {
                return Err(ClassgenError::malformed(source_name, index + 1, kind.keyword()));
            }
        }
    }

    Ok(Expansion { content, directive_count })
}

fn expand_directive(hierarchy: &ClassHierarchy, directive: &DirectiveMatch<'_>, out: &mut String) {
    match directive.kind {
        DirectiveKind::Subclasses => {
            out.push_str(directive.prefix);
            out.push_str(&render_class_list(hierarchy, directive.class_name));
            out.push_str(directive.suffix);
        }
        // Multi-line output: the rest of the line is dropped.
        DirectiveKind::IncludeSubclasses => {
            for line in render_include_lines(hierarchy, directive.class_name) {
                out.push_str(&line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classgen_core::ClassInfo;

    fn hierarchy() -> ClassHierarchy {
        [
            ClassInfo::new("A", "shogun/A.h").with_subclasses(["B", "C"]),
            ClassInfo::new("B", "shogun/B.h"),
            ClassInfo::new("C", "shogun/C.h").with_subclasses(["D"]),
            ClassInfo::new("D", "shogun/D.h"),
        ]
        .into_iter()
        .collect()
    }

    fn expand(source: &str) -> String {
        expand_template(&hierarchy(), "test.h.in", source).unwrap().content
    }

    #[test]
    fn test_plain_lines_pass_through() {
        let source = "// header\nint x = 1;\r\nno newline";
        assert_eq!(expand(source), source);
    }

    #[test]
    fn test_class_list_without_trailing_text() {
        assert_eq!(expand("%subclasses_of(A)"), "B,C,D");
    }

    #[test]
    fn test_class_list_keeps_prefix_and_suffix() {
        assert_eq!(
            expand("typedef Types<%subclasses_of(A)> Classes;\n"),
            "typedef Types<B,C,D> Classes;\n"
        );
        assert_eq!(expand("%subclasses_of(A)\nnext\n"), "B,C,D\nnext\n");
    }

    #[test]
    fn test_class_list_unknown_class() {
        assert_eq!(expand("X<%subclasses_of(Unknown)>\n"), "X<>\n");
    }

    #[test]
    fn test_include_lines_replace_whole_line() {
        let source = "#pragma once\n%include_subclasses_of(C) // trailing\nvoid f();\n";
        assert_eq!(expand(source), "#pragma once\n#include <shogun/D.h>\nvoid f();\n");
    }

    #[test]
    fn test_include_lines_for_leaf_remove_line() {
        assert_eq!(expand("a\n%include_subclasses_of(D)\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_directive_count() {
        let expansion = expand_template(
            &hierarchy(),
            "t",
            "%include_subclasses_of(A)\nplain\n%subclasses_of(C)\n",
        )
        .unwrap();
        assert_eq!(expansion.directive_count, 2);
        assert_eq!(
            expansion.content,
            "#include <shogun/B.h>\n#include <shogun/C.h>\n#include <shogun/D.h>\nplain\nD\n"
        );
    }

    #[test]
    fn test_malformed_directive_reports_line() {
        let err = expand_template(&hierarchy(), "bad.h.in", "ok\n%subclasses_of A\n").unwrap_err();
        match err {
            ClassgenError::MalformedDirective { file, line, directive } => {
                assert_eq!(file, "bad.h.in");
                assert_eq!(line, 2);
                assert_eq!(directive, "%subclasses_of");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
