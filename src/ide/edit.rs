//! Edit synthesis: the exact text change that makes a module reachable.

use tracing::debug;

use crate::base::{Position, TextEdit};
use crate::syntax::{MultiAlias, NotAnAliasLine, module_parts, utf16_len};

use super::placement::{line_of_updatable_alias, position_for_new_alias_line};

/// Merge a bare name into an existing alias line.
///
/// A bracket-group line gains a member; a simple alias line is converted
/// into a two-member group under its prefix. Members come out sorted, and
/// the text before the braces (indentation included) is preserved verbatim.
///
/// Errors when the line is not a mergeable alias directive; callers are
/// expected to pass lines found by
/// [`line_of_updatable_alias`](super::line_of_updatable_alias).
pub fn add_alias_name_to_line(name: &str, line: &str) -> Result<String, NotAnAliasLine> {
    let parsed = if line.contains('{') {
        MultiAlias::parse(line)
    } else {
        MultiAlias::from_simple_alias(line)
    };

    let mut group = parsed.ok_or_else(|| NotAnAliasLine {
        line: line.to_string(),
    })?;
    group.add(name);
    Ok(group.render())
}

/// The text edit that aliases `module_name` in the given document.
///
/// When a mergeable alias line exists the edit replaces that full line with
/// the merged rewrite (no trailing newline); otherwise it inserts a fresh
/// `alias <name>` line at the sorted position.
///
/// Callers must first establish that the name is not already reachable
/// (see [`document_already_has_alias`](super::document_already_has_alias));
/// this function does not re-check and will happily produce a duplicate.
pub fn text_edit_for_module(module_name: &str, text: &str) -> TextEdit {
    if let Some(idx) = line_of_updatable_alias(module_name, text) {
        let parts = module_parts(module_name);
        let line = text.split('\n').nth(idx).unwrap_or_default();

        if let Ok(merged) = add_alias_name_to_line(&parts.name, line) {
            debug!("merging {module_name} into alias line {idx}");
            return TextEdit::replacement(
                Position::new(idx, 0),
                Position::new(idx, utf16_len(line)),
                merged,
            );
        }
    }

    let position = position_for_new_alias_line(module_name, text);
    debug!(
        "new alias line for {module_name} at {}:{}",
        position.line, position.character
    );
    TextEdit::insertion(position, format!("alias {module_name}\n"))
}
