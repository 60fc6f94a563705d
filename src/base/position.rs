/// Positions and text edits for editor-facing results
///
/// Stores document locations (line/character) and edit instructions in the
/// convention editors expect: everything 0-indexed, character offsets
/// measured in UTF-16 code units.

/// A position in a document (0-indexed; `character` in UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A single contiguous replace-or-insert instruction.
///
/// When `end` is `None` the edit is a pure insertion at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: Position,
    pub end: Option<Position>,
    pub new_text: String,
}

impl TextEdit {
    /// Create a pure insertion at `position`.
    pub fn insertion(position: Position, new_text: impl Into<String>) -> Self {
        Self {
            start: position,
            end: None,
            new_text: new_text.into(),
        }
    }

    /// Create a replacement of the span `start..end`.
    pub fn replacement(start: Position, end: Position, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end: Some(end),
            new_text: new_text.into(),
        }
    }

    /// Apply this edit to a document string.
    ///
    /// Editors apply returned edits through their own buffer API; this is a
    /// reference implementation for embedders and tests. Positions beyond
    /// the end of a line or past the last line are clamped.
    pub fn apply(&self, text: &str) -> String {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end.unwrap_or(self.start));

        let mut out = String::with_capacity(text.len() + self.new_text.len());
        out.push_str(&text[..start]);
        out.push_str(&self.new_text);
        out.push_str(&text[end.max(start)..]);
        out
    }
}

/// Byte offset of a line/UTF-16-character position, clamped to the document.
fn byte_offset(text: &str, position: Position) -> usize {
    let mut offset = 0;
    for (idx, line) in text.split('\n').enumerate() {
        if idx == position.line {
            return offset + byte_of_utf16_column(line, position.character);
        }
        offset += line.len() + 1;
    }
    text.len()
}

/// Byte index within `line` of the given UTF-16 code-unit column.
fn byte_of_utf16_column(line: &str, column: usize) -> usize {
    let mut units = 0;
    for (idx, c) in line.char_indices() {
        if units >= column {
            return idx;
        }
        units += c.len_utf16();
    }
    line.len()
}
