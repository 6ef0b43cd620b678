//! Foundation types for the navigator.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/character positions for occurrences
//! - [`LineIndex`], [`LineCol`] - Offset to line/character conversion
//! - [`split_lines`] - Text to terminator-free lines
//! - [`NavError`] - The crate error type
//! - Domain constants (file extensions)
//!
//! This module has NO dependencies on other ffinav modules.

pub mod constants;
mod error;
mod line_index;
mod position;

pub use error::NavError;
pub use line_index::{LineCol, LineIndex, split_lines};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::TextSize;
