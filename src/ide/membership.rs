//! Reachability checks: is a module already defined or aliased here?

use crate::syntax::{MultiAlias, module_parts};

/// True iff the document contains a module-definition line for exactly this
/// name. Literal match on the canonical `defmodule <name> do` form, with no
/// whitespace tolerance beyond it.
pub fn document_defines_module(module_name: &str, text: &str) -> bool {
    text.contains(&format!("defmodule {module_name} do"))
}

/// True iff the document already aliases this module, either as a simple
/// alias or as a member of a bracket group under the name's exact prefix.
///
/// The simple-alias check is a loose substring match (`alias <name>`
/// anywhere in the text), so `alias Foo.Bar.Bin` also counts as covering
/// `Foo.Bar`. That keeps parity with the sibling-detection in
/// [`line_of_updatable_alias`](crate::ide::line_of_updatable_alias), which
/// treats such lines as merge candidates instead.
pub fn document_already_has_alias(module_name: &str, text: &str) -> bool {
    if text.contains(&format!("alias {module_name}")) {
        return true;
    }

    // Single-segment names cannot appear in bracket syntax
    let parts = module_parts(module_name);
    let Some(prefix) = parts.prefix else {
        return false;
    };

    text.split('\n')
        .filter_map(MultiAlias::parse)
        .any(|group| group.prefix() == prefix.as_str() && group.contains(&parts.name))
}
