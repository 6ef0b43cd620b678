//! Dialects — per-convention pattern sets.
//!
//! A dialect knows which files of a project belong to which [`SourceKind`],
//! and which patterns recognize definitions and references in each kind.
//! The generic matchers in [`crate::pattern`] stay convention-agnostic; all
//! the FFI-specific knowledge lives here.
//!
//! ## Key Types
//!
//! - [`Dialect`] — the capability set every convention implements
//! - [`Gem5Dialect`] — C++ simulator objects exposed to Python configs
//! - [`DialectRegistry`] — lookup by convention name, marker-based detection

mod gem5;
mod registry;

use std::path::{Path, PathBuf};

pub use gem5::{Gem5Dialect, Gem5Patterns};
pub use registry::{DialectConstructor, DialectRegistry};

use crate::base::Position;
use crate::base::constants::{NATIVE_EXTENSIONS, SCRIPTING_EXTENSIONS};
use crate::locator::SymbolLocator;
use crate::pattern::PatternMatcher;
use crate::symbols::Occurrence;

/// A source-file category with its own extraction entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// C/C++ headers and implementation files.
    Native,
    /// Python sources.
    Scripting,
}

impl SourceKind {
    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if NATIVE_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Native)
        } else if SCRIPTING_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Scripting)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Native => "native",
            SourceKind::Scripting => "scripting",
        }
    }
}

/// One FFI convention: its patterns, its file kinds, and its scan layout.
///
/// Implementations are read-only after construction and shared across
/// threads by the project loader.
pub trait Dialect: Send + Sync {
    /// Convention name used by the registry.
    fn name(&self) -> &'static str;

    /// The kind of `path`, or `None` when this dialect ignores the file.
    fn source_kind(&self, path: &Path) -> Option<SourceKind> {
        SourceKind::from_path(path)
    }

    /// Extract occurrences of one source kind from `lines[begin..end]`.
    fn extract(
        &self,
        kind: SourceKind,
        path: &str,
        lines: &[String],
        begin: usize,
        end: usize,
    ) -> Vec<Occurrence>;

    /// Extract a whole file, picking the kind from its path.
    fn extract_file(&self, path: &str, lines: &[String]) -> Vec<Occurrence> {
        match self.source_kind(Path::new(path)) {
            Some(kind) => self.extract(kind, path, lines, 0, lines.len()),
            None => Vec::new(),
        }
    }

    /// Generic identifier matcher used for position lookup.
    fn identifier(&self) -> &PatternMatcher;

    /// Directories under `root` to scan on top of the loader's defaults.
    fn additional_scan_dirs(&self, root: &Path) -> Vec<PathBuf>;

    /// Relative paths that must all exist for a root to use this dialect.
    fn markers(&self) -> &'static [&'static str] {
        &[]
    }

    /// The occurrence under `position`, if any.
    fn extract_symbol(
        &self,
        path: &str,
        lines: &[String],
        position: Position,
    ) -> Option<Occurrence> {
        SymbolLocator::new(vec![self.identifier()]).extract_symbol(path, lines, position)
    }
}
