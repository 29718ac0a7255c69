//! In-memory [`EditorHost`] implementation.

use super::{EditorHost, HostError, Position, Selection, TextRange};

/// A single document held in memory, with an optional selection.
///
/// Lines are separated by `\n`; a `\r` before it counts as an ordinary
/// character of its line. A host built with [`BufferHost::without_document`]
/// models an editor with nothing open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferHost {
    document: Option<String>,
    selection: Option<TextRange>,
}

impl BufferHost {
    /// Host with `text` open and no selection.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            document: Some(text.into()),
            selection: None,
        }
    }

    /// Host with no open document.
    pub fn without_document() -> Self {
        Self::default()
    }

    /// Select `range`, validating it against the document.
    pub fn select(&mut self, range: TextRange) -> Result<(), HostError> {
        let text = self.document.as_deref().unwrap_or_default();
        byte_range(text, range)?;
        self.selection = Some(range);
        Ok(())
    }

    pub fn with_selection(mut self, range: TextRange) -> Result<Self, HostError> {
        self.select(range)?;
        Ok(self)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<TextRange> {
        self.selection
    }

    pub fn text(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn into_text(self) -> Option<String> {
        self.document
    }
}

impl EditorHost for BufferHost {
    fn active_selection(&self) -> Option<Selection> {
        let text = self.document.as_deref()?;
        let range = self.selection.unwrap_or_default();
        // Ranges are validated on select and kept in step on replace.
        let selected = byte_range(text, range)
            .map(|(start, end)| &text[start..end])
            .unwrap_or_default();
        Some(Selection::new(selected, range))
    }

    fn full_buffer(&self) -> Option<Selection> {
        let text = self.document.as_deref()?;
        Some(Selection::new(
            text,
            TextRange::new(Position::default(), end_position(text)),
        ))
    }

    fn replace_range(&mut self, range: TextRange, replacement: &str) -> Result<(), HostError> {
        let Some(text) = self.document.as_mut() else {
            return Err(HostError::InvalidPosition(range.start));
        };
        let (start, end) = byte_range(text, range)?;
        text.replace_range(start..end, replacement);

        if self.selection.is_some() {
            self.selection = Some(TextRange::new(
                range.start,
                advance(range.start, replacement),
            ));
        }
        log::debug!(
            "Replaced {} ({} bytes) with {} bytes",
            range,
            end - start,
            replacement.len()
        );
        Ok(())
    }
}

/// Position just past the last character of `text`.
pub(crate) fn end_position(text: &str) -> Position {
    advance(Position::default(), text)
}

/// Position reached after inserting `text` at `from`.
fn advance(from: Position, text: &str) -> Position {
    match text.rfind('\n') {
        Some(last_newline) => Position::new(
            from.line + text.matches('\n').count(),
            text[last_newline + 1..].chars().count(),
        ),
        None => Position::new(from.line, from.ch + text.chars().count()),
    }
}

fn byte_range(text: &str, range: TextRange) -> Result<(usize, usize), HostError> {
    if range.start > range.end {
        return Err(HostError::InvertedRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok((byte_offset(text, range.start)?, byte_offset(text, range.end)?))
}

fn byte_offset(text: &str, pos: Position) -> Result<usize, HostError> {
    let mut line_start = 0;
    for (index, line) in text.split('\n').enumerate() {
        if index == pos.line {
            if pos.ch == 0 {
                return Ok(line_start);
            }
            return line
                .char_indices()
                .map(|(offset, _)| offset)
                .chain(std::iter::once(line.len()))
                .nth(pos.ch)
                .map(|offset| line_start + offset)
                .ok_or(HostError::InvalidPosition(pos));
        }
        line_start += line.len() + 1;
    }
    Err(HostError::InvalidPosition(pos))
}
