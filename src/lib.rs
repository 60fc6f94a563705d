//! # exalias-base
//!
//! Core library for Elixir alias analysis: deciding where and how to insert
//! an `alias` directive for a fully-qualified module name.
//!
//! The library is the analysis half of an editor completion feature. An
//! editor integration supplies a module name and a document's full text;
//! the core returns a precise text edit: either a brand-new alias line at
//! the lexically-sorted position, or a rewrite of an existing line that
//! merges the name into a bracketed multi-alias group
//! (`alias Foo.{Bar, Baz}`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → editor features (membership checks, placement search,
//!            edit synthesis, completion items)
//!   ↓
//! syntax   → line-level syntax: directive classification, module-name
//!            decomposition and ordering, multi-alias groups
//!   ↓
//! base     → primitives (Position, TextEdit)
//! ```
//!
//! Everything is a pure function over `&str` inputs: no I/O, no state held
//! between calls. The scope is deliberately line-oriented: no full Elixir
//! grammar, no multi-line directives, no comment/string awareness.

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: Position, TextEdit
pub mod base;

/// Line-level syntax: directives, module names, multi-alias groups
pub mod syntax;

/// Editor features: membership, placement, edit synthesis, completion
pub mod ide;

// Re-export foundation types
pub use base::{Position, TextEdit};

// Re-export the core analysis entry points
pub use ide::{
    CompletionItem, CompletionKind, add_alias_name_to_line, alias_completions,
    document_already_has_alias, document_defines_module, line_of_updatable_alias,
    position_for_new_alias_line, text_edit_for_module,
};
pub use syntax::{ModuleParts, compare_module_names, module_parts};
