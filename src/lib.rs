//! # ffinav-base
//!
//! Core library for cross-language FFI symbol extraction and navigation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace loading, file discovery
//!   ↓
//! ide       → AnalysisHost, goto-def, find-references
//!   ↓
//! index     → Cross-file symbol index, reference resolution
//!   ↓
//! dialect   → Convention-specific pattern sets (gem5), registry
//!   ↓
//! locator   → Symbol under the cursor
//!   ↓
//! pattern   → Regex-driven occurrence matchers
//!   ↓
//! symbols   → Occurrence model (Definition / Reference)
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, NavError)
//! ```

// ============================================================================
// MODULES (dependency order, lowest first)
// ============================================================================

/// Foundation types: Position, Span, LineIndex, errors
pub mod base;

/// Occurrence model shared by every extractor
pub mod symbols;

/// Pattern matchers: one expression plus one classifier
pub mod pattern;

/// Position resolver: windowed, priority-ordered symbol lookup
pub mod locator;

/// Dialects: per-convention pattern sets and the registry
pub mod dialect;

/// Symbol index: key → definitions / references
pub mod index;

/// IDE features: symbol at position, goto-definition, find-references
pub mod ide;

/// Project management: file discovery and workspace loading
pub mod project;

// Re-export foundation types
pub use base::{LineCol, LineIndex, NavError, Position, Span, TextSize, split_lines};
pub use symbols::{Occurrence, OccurrenceKind, Symbol};
