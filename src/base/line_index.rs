//! Byte offset to line/character conversion for multi-line text blocks.

use text_size::TextSize;

/// A zero-based line and character pair produced by [`LineIndex::line_col`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub character: usize,
}

/// Maps byte offsets within a `\n`-separated text block back to
/// line/character coordinates.
#[derive(Debug, Clone)]
pub struct LineIndex<'t> {
    text: &'t str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
}

impl<'t> LineIndex<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::from((idx + 1) as u32)),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line/character pair.
    ///
    /// `offset` must fall on a char boundary. Offsets past the end clamp to
    /// the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text));
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = usize::from(self.line_starts[line]);
        let character = self
            .text
            .get(line_start..usize::from(offset))
            .map(|prefix| prefix.chars().count())
            .unwrap_or_default();
        LineCol { line, character }
    }
}

/// Split text into lines without their terminators (`\n` or `\r\n`).
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
