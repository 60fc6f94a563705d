//! Line-local directive classification.
//!
//! Each predicate inspects a single line of text: optional leading
//! whitespace, a keyword, then a following token. Directives spanning
//! multiple lines are out of scope, as is anything inside comments or
//! string literals: a commented-out `alias` line classifies as an alias.

use thiserror::Error;

/// A line handed to [`module_name_from_alias_line`] was not shaped like an
/// alias directive. Callers must classify lines with [`line_is_alias`]
/// before extracting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an alias line: {line:?}")]
pub struct NotAnAliasLine {
    pub line: String,
}

/// Check if a character is part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters, which
/// covers the ASCII letters/digits/underscore of Elixir module and alias
/// names.
#[inline]
pub(crate) fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Strip leading indentation (spaces or tabs) from a line.
#[inline]
pub(crate) fn strip_indent(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Count of leading whitespace characters (spaces or tabs counted
/// individually, never tab-expanded).
pub fn line_start_offset(line: &str) -> usize {
    line.len() - strip_indent(line).len()
}

/// Length of a line in UTF-16 code units, the unit editors measure
/// character offsets in.
pub fn utf16_len(line: &str) -> usize {
    line.encode_utf16().count()
}

/// `defmodule <name> do`, with optional leading whitespace.
pub fn line_is_defmodule(line: &str) -> bool {
    let Some(rest) = strip_indent(line).strip_prefix("defmodule") else {
        return false;
    };
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return false;
    }
    // at least one character between the module name start and " do"
    chars.as_str().find(" do").is_some_and(|idx| idx > 0)
}

/// `use <Module>`, with optional leading whitespace.
pub fn line_is_use(line: &str) -> bool {
    keyword_then_word(line, "use ")
}

/// `import <Module>`, with optional leading whitespace.
pub fn line_is_import(line: &str) -> bool {
    keyword_then_word(line, "import ")
}

/// `alias <Module>`, with optional leading whitespace.
pub fn line_is_alias(line: &str) -> bool {
    keyword_then_word(line, "alias ")
}

fn keyword_then_word(line: &str, keyword: &str) -> bool {
    strip_indent(line)
        .strip_prefix(keyword)
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_word_character)
}

/// Extract the referenced module name from an alias line.
///
/// Returns everything after `alias ` verbatim, so a bracketed group line
/// yields its full group text (`Foo.Bar.{Baz, Bin}`). Errors when the line
/// is not shaped like an alias directive.
pub fn module_name_from_alias_line(line: &str) -> Result<&str, NotAnAliasLine> {
    match strip_indent(line).strip_prefix("alias ") {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(NotAnAliasLine {
            line: line.to_string(),
        }),
    }
}
