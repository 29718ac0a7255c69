//! Editor host boundary.
//!
//! The converter never talks to a concrete editor. A host adapter implements
//! [`EditorHost`] to hand over the focused selection (or the whole buffer) and
//! to write the converted text back.
//!
//! # Sub-modules
//!
//! - [`buffer`]: [`BufferHost`], an in-memory document used by the CLI and tests

mod buffer;

pub use buffer::BufferHost;

use std::fmt;

/// A location in a document: zero-based line and character (Unicode scalar) offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width range at `at`, i.e. a bare cursor.
    pub const fn collapsed(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Text taken from a document together with the range it occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub range: TextRange,
}

impl Selection {
    pub fn new(text: impl Into<String>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Errors a host reports when asked to edit its document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("position {0} is outside the document")]
    InvalidPosition(Position),

    #[error("range start {start} is after its end {end}")]
    InvertedRange { start: Position, end: Position },
}

/// What a converter needs from an editor.
///
/// `None` from either query means there is no focused editor or no open
/// document; callers treat that as "nothing to convert", not as a failure.
pub trait EditorHost {
    /// Current selection in the focused document. An empty selection carries
    /// the cursor position as a collapsed range.
    fn active_selection(&self) -> Option<Selection>;

    /// The whole document, from `0:0` to the end of its last line.
    fn full_buffer(&self) -> Option<Selection>;

    /// Replace `range` with `text`, leaving everything outside it unchanged.
    fn replace_range(&mut self, range: TextRange, text: &str) -> Result<(), HostError>;
}
