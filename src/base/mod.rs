//! Foundation types for alias analysis.
//!
//! This module provides the primitives shared by the rest of the crate:
//! - [`Position`] - Line/column positions (0-indexed, UTF-16 columns)
//! - [`TextEdit`] - A single replace-or-insert instruction
//!
//! This module has NO dependencies on other exalias modules.

mod position;

pub use position::{Position, TextEdit};
