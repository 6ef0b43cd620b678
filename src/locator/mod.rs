//! Position resolver — find the occurrence under a cursor.
//!
//! Resolution is interactive, so it never scans the whole file: the window
//! is a few lines around the cursor (see [`LocatorOptions`]). Matchers run in
//! priority order and the first occurrence whose span contains the cursor
//! wins.

use crate::base::Position;
use crate::pattern::PatternMatcher;
use crate::symbols::Occurrence;

/// Scan window around the cursor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Lines scanned above the cursor line.
    pub lines_before: usize,
    /// Exclusive end of the window, counted from the cursor line.
    pub lines_after: usize,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            lines_before: 1,
            lines_after: 2,
        }
    }
}

impl LocatorOptions {
    /// The clamped `[begin, end)` window for a cursor on `line`.
    pub fn window(&self, line: usize, line_count: usize) -> (usize, usize) {
        let end = line.saturating_add(self.lines_after).min(line_count);
        let begin = line.saturating_sub(self.lines_before).min(end);
        (begin, end)
    }
}

/// Finds the occurrence under a cursor using an ordered set of matchers.
#[derive(Debug, Clone)]
pub struct SymbolLocator<'a> {
    matchers: Vec<&'a PatternMatcher>,
    options: LocatorOptions,
}

impl<'a> SymbolLocator<'a> {
    /// Create a locator over `matchers`, highest priority first.
    pub fn new(matchers: Vec<&'a PatternMatcher>) -> Self {
        Self {
            matchers,
            options: LocatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LocatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> LocatorOptions {
        self.options
    }

    /// Return the first occurrence whose range contains `position`.
    ///
    /// `None` means the cursor is not on a recognizable symbol.
    pub fn extract_symbol<S: AsRef<str>>(
        &self,
        path: &str,
        lines: &[S],
        position: Position,
    ) -> Option<Occurrence> {
        let (begin, end) = self.options.window(position.line, lines.len());
        if begin >= end {
            return None;
        }

        let found = self.matchers.iter().find_map(|matcher| {
            matcher
                .extract(path, lines, begin, end)
                .into_iter()
                .find(|occurrence| occurrence.range().contains(position))
        });

        tracing::trace!(
            "symbol at {}:{}:{} -> {:?}",
            path,
            position.line,
            position.character,
            found.as_ref().map(Occurrence::key)
        );
        found
    }
}
