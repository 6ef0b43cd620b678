//! Pattern matchers — one regular expression plus one classifier.
//!
//! A [`PatternMatcher`] scans a window of lines and turns every match into an
//! [`Occurrence`](crate::symbols::Occurrence). The matcher itself does not know
//! whether a match is a definition or a reference; that decision belongs to
//! the [`Classify`] function it was built with.
//!
//! ## Modes
//!
//! - [`MatchMode::Search`] — first match anywhere in each line
//! - [`MatchMode::FullLine`] — each line must match in its entirety
//! - [`MatchMode::FindAll`] — every non-overlapping match in the window,
//!   with the window's lines joined by `\n`
//!
//! If the expression has a capture group named [`KEY_GROUP`], the reported
//! span covers exactly that group. Otherwise it covers the whole match.

mod matcher;

pub use matcher::{Classify, KEY_GROUP, MatchMode, PatternMatcher, define_key, reference_key};
