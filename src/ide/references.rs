//! Find references implementation.

use crate::base::Position;
use crate::dialect::Dialect;
use crate::index::SymbolIndex;
use crate::symbols::Occurrence;

/// Result of a find-references request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceResult {
    /// All occurrences found: definitions first when requested, then references.
    pub references: Vec<Occurrence>,
    /// Whether definitions were included.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// Find all references to the symbol at the given position.
///
/// References to keys without any definition are never returned.
pub fn find_references(
    dialect: &dyn Dialect,
    index: &SymbolIndex,
    path: &str,
    lines: &[String],
    position: Position,
    include_declaration: bool,
) -> ReferenceResult {
    let Some(symbol) = dialect.extract_symbol(path, lines, position) else {
        return ReferenceResult::empty();
    };

    let mut references = Vec::new();
    if include_declaration {
        references.extend_from_slice(index.definitions(symbol.key()));
    }
    references.extend_from_slice(index.references(symbol.key()));

    ReferenceResult {
        references,
        include_declaration,
    }
}
