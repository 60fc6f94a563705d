//! Editor features: high-level APIs for completion handlers.
//!
//! This module is the interface between the line-level syntax layer and an
//! editor integration. Each function corresponds to one question the
//! integration asks per completion request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor types**: Uses our own types, converted at the boundary
//! 3. **Stateless**: Every call recomputes from the supplied document text

mod completion;
mod edit;
mod membership;
mod placement;

pub use completion::{CompletionItem, CompletionKind, alias_completions};
pub use edit::{add_alias_name_to_line, text_edit_for_module};
pub use membership::{document_already_has_alias, document_defines_module};
pub use placement::{line_of_updatable_alias, position_for_new_alias_line};
