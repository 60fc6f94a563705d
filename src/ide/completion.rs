//! Completion suggestions for aliasable modules.
//!
//! The editor integration harvests module names from the workspace (any
//! file matching the `defmodule` pattern) and hands them here together with
//! the current document text. Each suggestion carries the text edit that
//! makes the module reachable, ready to apply verbatim alongside the
//! inserted completion token.

use std::sync::Arc;

use tracing::trace;

use crate::base::TextEdit;
use crate::syntax::{compare_module_names, module_parts};

use super::edit::text_edit_for_module;
use super::membership::{document_already_has_alias, document_defines_module};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Module,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Module => 9, // Module
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The fully-qualified module name.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Text to insert at the cursor (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// The alias edit to apply elsewhere in the document.
    pub additional_edit: Option<TextEdit>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            additional_edit: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Attach the alias edit.
    pub fn with_additional_edit(mut self, edit: TextEdit) -> Self {
        self.additional_edit = Some(edit);
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Completion items for every known module the document does not yet reach.
///
/// Modules the document defines or already aliases are skipped. Each item
/// inserts the module's trailing name at the cursor and carries the alias
/// edit as `additional_edit`. Items are sorted by module-name order and
/// deduplicated by label.
pub fn alias_completions<S: AsRef<str>>(known_modules: &[S], text: &str) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = known_modules
        .iter()
        .map(AsRef::as_ref)
        .filter(|module| {
            let reachable =
                document_defines_module(module, text) || document_already_has_alias(module, text);
            if reachable {
                trace!("skipping {module}: already reachable");
            }
            !reachable
        })
        .map(|module| {
            let parts = module_parts(module);
            CompletionItem::new(module, CompletionKind::Module)
                .with_detail(format!("alias {module}"))
                .with_insert_text(parts.name.as_str())
                .with_additional_edit(text_edit_for_module(module, text))
        })
        .collect();

    items.sort_by(|a, b| compare_module_names(&a.label, &b.label));
    items.dedup_by(|a, b| a.label == b.label);

    items
}
