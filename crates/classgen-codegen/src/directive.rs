//! Directive detection within a single template line.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Either directive keyword. The longer keyword comes first so that
/// `%include_subclasses_of` is never read as `%subclasses_of`.
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:include_subclasses_of|subclasses_of)").expect("keyword pattern is valid")
});

/// A keyword followed by its parenthesized argument.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:include_subclasses_of|subclasses_of)\s*\((?P<arg>[^()\n]*)\)")
        .expect("directive pattern is valid")
});

/// Kind of template directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `%subclasses_of(X)`: comma-separated class names.
    Subclasses,
    /// `%include_subclasses_of(X)`: one `#include` line per class.
    IncludeSubclasses,
}

impl DirectiveKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Subclasses => "%subclasses_of",
            DirectiveKind::IncludeSubclasses => "%include_subclasses_of",
        }
    }

    fn from_keyword(keyword: &str) -> Self {
        if keyword == DirectiveKind::IncludeSubclasses.keyword() {
            DirectiveKind::IncludeSubclasses
        } else {
            DirectiveKind::Subclasses
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A directive found on a line, split around the matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveMatch<'a> {
    pub kind: DirectiveKind,
    pub class_name: &'a str,
    /// Text before the keyword.
    pub prefix: &'a str,
    /// Text after the closing parenthesis, line terminator included.
    pub suffix: &'a str,
}

/// Result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineScan<'a> {
    Plain,
    Directive(DirectiveMatch<'a>),
    /// Keyword present without a parenthesized argument.
    Malformed(DirectiveKind),
}

/// Find the leftmost directive on `line`.
///
/// Only one directive per line is recognised.
pub fn scan_line(line: &str) -> LineScan<'_> {
    let Some(keyword) = KEYWORD.find(line) else {
        return LineScan::Plain;
    };
    let kind = DirectiveKind::from_keyword(keyword.as_str());

    let Some(captures) = DIRECTIVE.captures_at(line, keyword.start()) else {
        return LineScan::Malformed(kind);
    };
    let (Some(whole), Some(arg)) = (captures.get(0), captures.name("arg")) else {
        return LineScan::Malformed(kind);
    };
    if whole.start() != keyword.start() {
        return LineScan::Malformed(kind);
    }

    LineScan::Directive(DirectiveMatch {
        kind,
        class_name: arg.as_str().trim(),
        prefix: &line[..whole.start()],
        suffix: &line[whole.end()..],
    })
}
