//! Line-level Elixir syntax.
//!
//! Directive classification is purely line-local: a line either is or is not
//! a `defmodule`/`use`/`import`/`alias` directive on its own, with no
//! multi-line awareness. Module names are dot-separated identifier paths;
//! bracketed multi-alias groups (`alias Foo.{Bar, Baz}`) get a small parsed
//! representation with a render-back-to-text function.

mod directive;
mod module_name;
mod multi_alias;

pub use directive::{
    NotAnAliasLine, line_is_alias, line_is_defmodule, line_is_import, line_is_use,
    line_start_offset, module_name_from_alias_line, utf16_len,
};
pub(crate) use directive::{is_word_character, strip_indent};
pub use module_name::{ModuleParts, compare_module_names, module_parts};
pub use multi_alias::MultiAlias;
