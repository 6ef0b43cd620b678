//! Position tracking for occurrences.
//!
//! Stores the source location (line/character) of matched tokens for
//! navigation features like go-to-definition and find-references.

/// A span representing a range in source code (0-indexed for LSP compatibility)
///
/// `end` points one past the last character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
///
/// `character` counts chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "span start after end: {start:?} > {end:?}");
        Self { start, end }
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// Create a span covering `start..end` on a single line
    pub fn on_line(line: usize, start_character: usize, end_character: usize) -> Self {
        Self::from_coords(line, start_character, line, end_character)
    }

    /// Check if a position falls within this span
    ///
    /// Both ends are inclusive, so a cursor sitting right after the
    /// last character of a token still counts as being on it.
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.character < self.start.character {
            return false;
        }
        if position.line == self.end.line && position.character > self.end.character {
            return false;
        }
        true
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}
