//! Placement search: where does a new or merged alias belong?

use std::cmp::Ordering;

use tracing::trace;

use crate::base::Position;
use crate::syntax::{
    compare_module_names, is_word_character, line_is_alias, line_is_defmodule, line_is_import,
    line_is_use, line_start_offset, module_name_from_alias_line, module_parts, strip_indent,
};

/// Position for a brand-new alias line, respecting the lexical-sort
/// convention for alias blocks.
///
/// Priority order:
/// 1. Existing alias lines: before the first one whose reference sorts
///    after the target (or after the last alias line when the target sorts
///    last), at that line's indentation.
/// 2. Otherwise after the last `defmodule`/`use`/`import` line, indented
///    two further columns when that line is the `defmodule` itself.
/// 3. Otherwise the top of the document.
pub fn position_for_new_alias_line(module_name: &str, text: &str) -> Position {
    let lines: Vec<&str> = text.split('\n').collect();

    let alias_lines: Vec<(usize, &str)> = lines
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, line)| line_is_alias(line))
        .collect();

    if let Some(&(last_idx, last_line)) = alias_lines.last() {
        for &(idx, line) in &alias_lines {
            // classified as alias lines, so extraction cannot fail
            let Ok(existing) = module_name_from_alias_line(line) else {
                continue;
            };
            if compare_module_names(module_name, existing) == Ordering::Less {
                trace!("inserting {module_name} before {existing} at line {idx}");
                return Position::new(idx, line_start_offset(line));
            }
        }
        // target sorts after every existing alias
        return Position::new(last_idx + 1, line_start_offset(last_line));
    }

    let last_relevant = lines
        .iter()
        .copied()
        .enumerate()
        .rev()
        .find(|(_, line)| line_is_defmodule(line) || line_is_use(line) || line_is_import(line));

    match last_relevant {
        // first member of the module body gets the standard two-space indent
        Some((idx, line)) if line_is_defmodule(line) => {
            Position::new(idx + 1, line_start_offset(line) + 2)
        }
        Some((idx, line)) => Position::new(idx + 1, line_start_offset(line)),
        None => Position::new(0, 0),
    }
}

/// Find the first alias line that can absorb this module name: either a
/// bracket group under the name's exact prefix, or a simple alias of a
/// sibling under the same prefix (which a merge converts to a group).
///
/// Returns `None` when the name has no prefix or no such line exists.
/// Assumes the caller has already ruled out that the name itself is
/// aliased: a group lacking the target name and a sibling alias both count
/// as candidates here.
pub fn line_of_updatable_alias(module_name: &str, text: &str) -> Option<usize> {
    let prefix = module_parts(module_name).prefix?;

    text.split('\n')
        .position(|line| is_updatable_alias_line(line, &prefix))
}

/// `<ws>alias <prefix>.` followed by a bare identifier running to the end
/// of the line, or by an opening brace.
fn is_updatable_alias_line(line: &str, prefix: &str) -> bool {
    let Some(rest) = strip_indent(line)
        .strip_prefix("alias ")
        .and_then(|r| r.strip_prefix(prefix))
        .and_then(|r| r.strip_prefix('.'))
    else {
        return false;
    };

    rest.starts_with('{') || (!rest.is_empty() && rest.chars().all(is_word_character))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_after_defmodule() {
        let text = "defmodule Abc do\nend";
        assert_eq!(
            position_for_new_alias_line("Foo", text),
            Position::new(1, 2)
        );
    }

    #[test]
    fn test_position_after_last_use_or_import() {
        let text = "defmodule Abc do\n  use Abc, :thing\nend";
        assert_eq!(
            position_for_new_alias_line("Foo", text),
            Position::new(2, 2)
        );

        let text = "defmodule Abc do\n  import Abc, only: [thing: 2]\nend";
        assert_eq!(
            position_for_new_alias_line("Foo", text),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_position_sorts_into_alias_block() {
        let text = "defmodule Abc do\n  alias Abc\n  alias Xyx\nend";
        // Abc < Foo < Xyx: insert before the Xyx line
        assert_eq!(
            position_for_new_alias_line("Foo", text),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_position_after_last_alias_when_target_sorts_last() {
        let text = "defmodule Abc do\n  alias Abc\nend";
        assert_eq!(
            position_for_new_alias_line("Foo", text),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_position_empty_document_falls_back_to_origin() {
        assert_eq!(position_for_new_alias_line("Foo", ""), Position::new(0, 0));
        assert_eq!(
            position_for_new_alias_line("Foo", "# just a comment\n"),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_updatable_line_simple_sibling() {
        let text = "defmodule Abc do\n  alias Foo.Bar\nend";
        assert_eq!(line_of_updatable_alias("Foo.Baz", text), Some(1));
    }

    #[test]
    fn test_updatable_line_bracket_group() {
        let text = "defmodule Abc do\n  alias Foo.{Bar, Baz}\nend";
        assert_eq!(line_of_updatable_alias("Foo.Bin", text), Some(1));
    }

    #[test]
    fn test_updatable_line_rejects_deeper_references() {
        // `alias Foo.Bar.Bin` aliases a submodule, not a sibling of Foo.Bar
        let text = "defmodule Abc do\n  alias Foo.Bar.Bin\nend";
        assert_eq!(line_of_updatable_alias("Foo.Bar", text), None);

        let text = "defmodule Abc do\n  alias Foo.Bar.{Baz, Bin}\nend";
        assert_eq!(line_of_updatable_alias("Foo.Bar", text), None);
    }

    #[test]
    fn test_updatable_line_requires_prefix() {
        let text = "defmodule Abc do\n  alias Foo.Bar\nend";
        assert_eq!(line_of_updatable_alias("Foo", text), None);
    }
}
