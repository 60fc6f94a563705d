//! Bracketed multi-alias groups.
//!
//! A multi-alias directive names several sibling modules under one prefix:
//! `alias Foo.Bar.{Baz, Bin}`. The group is modeled as a parsed value (the
//! verbatim pre-brace text plus an ordered member list) with a render
//! function, rather than ad hoc string slicing, so brace and period
//! placement survive a rewrite untouched.

use smol_str::SmolStr;

use super::directive::{is_word_character, module_name_from_alias_line, strip_indent};
use super::module_name::compare_module_names;

/// A parsed multi-alias directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiAlias {
    /// Verbatim text before the opening brace, e.g. `  alias Foo.Bar.`.
    head: String,
    /// Dotted prefix shared by all members, e.g. `Foo.Bar`.
    prefix: SmolStr,
    /// Bare member names inside the braces.
    members: Vec<SmolStr>,
}

impl MultiAlias {
    /// Parse a bracketed alias line, e.g. `  alias Foo.Bar.{Baz, Bin}`.
    ///
    /// Returns `None` unless the line is an alias directive whose reference
    /// ends in `.{...}` with a comma-separated list of bare identifiers
    /// inside the braces.
    pub fn parse(line: &str) -> Option<Self> {
        let brace = line.find('{')?;
        let (head, tail) = line.split_at(brace);

        let prefix = strip_indent(head)
            .strip_prefix("alias ")?
            .strip_suffix('.')?;
        if prefix.is_empty() || !prefix.split('.').all(is_identifier) {
            return None;
        }

        let inner = tail.trim_end().strip_prefix('{')?.strip_suffix('}')?;
        let members = parse_member_list(inner)?;

        Some(Self {
            head: head.to_string(),
            prefix: SmolStr::new(prefix),
            members,
        })
    }

    /// Reinterpret a simple alias line (`  alias Foo.Bar`) as a one-member
    /// group (`  alias Foo.` + `Bar`), the seed for converting it into
    /// bracket syntax. Requires a dotted (two-or-more segment) reference.
    pub fn from_simple_alias(line: &str) -> Option<Self> {
        if line.contains('{') {
            return None;
        }
        let reference = module_name_from_alias_line(line).ok()?;
        let (prefix, name) = reference.rsplit_once('.')?;

        // head is everything up to and including the final period
        let dot = line.rfind('.')?;
        Some(Self {
            head: line[..=dot].to_string(),
            prefix: SmolStr::new(prefix),
            members: vec![SmolStr::new(name)],
        })
    }

    /// The dotted prefix shared by all members.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The member names, in their current order.
    pub fn members(&self) -> &[SmolStr] {
        &self.members
    }

    /// Member test by trailing name.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    /// Add a member and restore sort order.
    pub fn add(&mut self, name: &str) {
        self.members.push(SmolStr::new(name));
        self.members
            .sort_by(|a, b| compare_module_names(a, b));
    }

    /// Render back to a single line, preserving the pre-brace text verbatim.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.head.len() + 2 + self.members.len() * 8);
        out.push_str(&self.head);
        out.push('{');
        for (idx, member) in self.members.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(member);
        }
        out.push('}');
        out
    }
}

fn is_identifier(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(is_word_character)
}

/// Comma-separated bare names, with optional space after each comma.
fn parse_member_list(inner: &str) -> Option<Vec<SmolStr>> {
    let mut members = Vec::new();
    for part in inner.split(',') {
        let name = part.strip_prefix(' ').unwrap_or(part);
        if !is_identifier(name) {
            return None;
        }
        members.push(SmolStr::new(name));
    }
    Some(members)
}
