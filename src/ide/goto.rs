//! Go-to-definition implementation.

use crate::base::Position;
use crate::dialect::Dialect;
use crate::index::SymbolIndex;
use crate::symbols::Occurrence;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GotoResult {
    /// The occurrence under the cursor, if any.
    pub source: Option<Occurrence>,
    /// The definitions to jump to.
    pub targets: Vec<Occurrence>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Find the definition(s) of the symbol at the given position.
///
/// # Arguments
/// * `dialect` - Dialect used to find the symbol under the cursor
/// * `index` - The symbol index to resolve against
/// * `path` - The file containing the cursor
/// * `lines` - Contents of that file
/// * `position` - Cursor position (0-indexed)
///
/// # Returns
/// Every definition sharing the symbol's key, or empty if the cursor is
/// not on a symbol or the key is unknown.
pub fn goto_definition(
    dialect: &dyn Dialect,
    index: &SymbolIndex,
    path: &str,
    lines: &[String],
    position: Position,
) -> GotoResult {
    let Some(source) = dialect.extract_symbol(path, lines, position) else {
        return GotoResult::empty();
    };

    let targets = index.resolve(source.key()).into_vec();
    tracing::debug!(
        "goto {} at {}:{} -> {} target(s)",
        source.key(),
        path,
        position.line,
        targets.len()
    );

    GotoResult {
        source: Some(source),
        targets,
    }
}
