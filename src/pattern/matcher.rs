//! PatternMatcher implementation

use std::fmt;
use std::sync::Arc;

use fancy_regex::{Captures, Match, Regex};

use crate::base::{LineIndex, NavError, Span, TextSize};
use crate::symbols::{Occurrence, OccurrenceKind, Symbol};

/// Name of the capture group holding the symbol key.
pub const KEY_GROUP: &str = "key";

/// How a [`PatternMatcher`] applies its expression to the scan window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// At most one match per line, found anywhere in the line.
    Search,
    /// At most one match per line, which must cover the whole line.
    FullLine,
    /// Every non-overlapping match across the whole window.
    FindAll,
}

/// Turns one match into an occurrence, or rejects it.
///
/// Receives the captures, the originating path and the span computed by the
/// matcher.
pub type Classify = fn(&Captures<'_>, &Arc<str>, Span) -> Option<Occurrence>;

/// Classify the `key` group as a definition.
pub fn define_key(captures: &Captures<'_>, path: &Arc<str>, range: Span) -> Option<Occurrence> {
    classify_key(OccurrenceKind::Definition, captures, path, range)
}

/// Classify the `key` group as a reference.
pub fn reference_key(captures: &Captures<'_>, path: &Arc<str>, range: Span) -> Option<Occurrence> {
    classify_key(OccurrenceKind::Reference, captures, path, range)
}

fn classify_key(
    kind: OccurrenceKind,
    captures: &Captures<'_>,
    path: &Arc<str>,
    range: Span,
) -> Option<Occurrence> {
    let key = captures.name(KEY_GROUP)?;
    Some(Occurrence::new(
        kind,
        Symbol::new(key.as_str(), path.clone(), range),
    ))
}

/// A compiled expression, a mode and a classifier.
///
/// Immutable once built; cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct PatternMatcher {
    regex: Regex,
    mode: MatchMode,
    classify: Classify,
}

impl fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("pattern", &self.regex.as_str())
            .field("mode", &self.mode)
            .finish()
    }
}

impl PatternMatcher {
    /// Compile `pattern` for the given mode.
    pub fn new(pattern: &str, mode: MatchMode, classify: Classify) -> Result<Self, NavError> {
        let source = match mode {
            MatchMode::FullLine => format!("^(?:{pattern})$"),
            MatchMode::Search | MatchMode::FindAll => pattern.to_string(),
        };
        let regex = Regex::new(&source).map_err(|e| NavError::invalid_pattern(pattern, e))?;
        Ok(Self {
            regex,
            mode,
            classify,
        })
    }

    /// Shorthand for [`MatchMode::Search`].
    pub fn search(pattern: &str, classify: Classify) -> Result<Self, NavError> {
        Self::new(pattern, MatchMode::Search, classify)
    }

    /// Shorthand for [`MatchMode::FullLine`].
    pub fn full_line(pattern: &str, classify: Classify) -> Result<Self, NavError> {
        Self::new(pattern, MatchMode::FullLine, classify)
    }

    /// Shorthand for [`MatchMode::FindAll`].
    pub fn find_all(pattern: &str, classify: Classify) -> Result<Self, NavError> {
        Self::new(pattern, MatchMode::FindAll, classify)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Extract occurrences from `lines[begin..end]`, in source order.
    ///
    /// `end` is clamped to the number of lines and `begin` to `end`.
    pub fn extract<S: AsRef<str>>(
        &self,
        path: &str,
        lines: &[S],
        begin: usize,
        end: usize,
    ) -> Vec<Occurrence> {
        let end = end.min(lines.len());
        let begin = begin.min(end);
        let path: Arc<str> = Arc::from(path);
        let window = &lines[begin..end];

        match self.mode {
            MatchMode::Search | MatchMode::FullLine => self.extract_lines(&path, window, begin),
            MatchMode::FindAll => self.extract_block(&path, window, begin),
        }
    }

    fn extract_lines<S: AsRef<str>>(
        &self,
        path: &Arc<str>,
        window: &[S],
        first_line: usize,
    ) -> Vec<Occurrence> {
        let mut results = Vec::new();

        for (offset, line) in window.iter().enumerate() {
            let line = line.as_ref();
            let line_no = first_line + offset;

            let captures = match self.regex.captures(line) {
                Ok(Some(captures)) => captures,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(
                        "Pattern `{}` failed on {}:{}: {}",
                        self.regex.as_str(),
                        path,
                        line_no,
                        err
                    );
                    continue;
                }
            };

            let Some(token) = token_match(&captures) else {
                continue;
            };
            let range = Span::on_line(
                line_no,
                char_offset(line, token.start()),
                char_offset(line, token.end()),
            );
            if let Some(occurrence) = (self.classify)(&captures, path, range) {
                results.push(occurrence);
            }
        }

        results
    }

    fn extract_block<S: AsRef<str>>(
        &self,
        path: &Arc<str>,
        window: &[S],
        first_line: usize,
    ) -> Vec<Occurrence> {
        let block = window
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("\n");
        let index = LineIndex::new(&block);
        let mut results = Vec::new();

        for captures in self.regex.captures_iter(&block) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    tracing::warn!(
                        "Pattern `{}` failed on {} (lines {}..{}): {}",
                        self.regex.as_str(),
                        path,
                        first_line,
                        first_line + window.len(),
                        err
                    );
                    break;
                }
            };

            let Some(token) = token_match(&captures) else {
                continue;
            };
            let start = index.line_col(text_size(token.start()));
            let end = index.line_col(text_size(token.end()));
            let range = Span::from_coords(
                first_line + start.line,
                start.character,
                first_line + end.line,
                end.character,
            );
            if let Some(occurrence) = (self.classify)(&captures, path, range) {
                results.push(occurrence);
            }
        }

        results
    }
}

/// The `key` group when it participated, the whole match otherwise.
fn token_match<'t>(captures: &Captures<'t>) -> Option<Match<'t>> {
    captures.name(KEY_GROUP).or_else(|| captures.get(0))
}

fn char_offset(line: &str, byte_offset: usize) -> usize {
    line.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_default()
}

fn text_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}
