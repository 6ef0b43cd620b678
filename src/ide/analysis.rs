//! AnalysisHost — owns file contents, the index and the active dialect.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(Arc::new(Gem5Dialect::new()?));
//!
//! // Apply file changes
//! host.set_file_content(path, content);
//!
//! // Query
//! let goto = host.goto_definition(path, Position::new(line, character));
//! let refs = host.find_references(path, Position::new(line, character), true);
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::{Position, split_lines};
use crate::dialect::Dialect;
use crate::index::SymbolIndex;
use crate::symbols::Occurrence;

use super::{GotoResult, ReferenceResult};

/// Owns all mutable state for the IDE layer.
pub struct AnalysisHost {
    dialect: Arc<dyn Dialect>,
    /// File contents, split into lines.
    files: FxHashMap<Arc<str>, Vec<String>>,
    /// Occurrences of every file, by key.
    index: SymbolIndex,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            files: FxHashMap::default(),
            index: SymbolIndex::new(),
        }
    }

    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.dialect
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Set the content of a file and re-extract it.
    pub fn set_file_content(&mut self, path: &str, content: &str) {
        self.set_file_lines(path, split_lines(content));
    }

    /// Set the lines of a file and re-extract it.
    pub fn set_file_lines(&mut self, path: &str, lines: Vec<String>) {
        let occurrences = self.dialect.extract_file(path, &lines);
        self.insert_file(path, lines, occurrences);
    }

    /// Store a file whose occurrences were already extracted.
    pub(crate) fn insert_file(
        &mut self,
        path: &str,
        lines: Vec<String>,
        occurrences: Vec<Occurrence>,
    ) {
        self.index.add_file(path, occurrences);
        self.files.insert(Arc::from(path), lines);
    }

    pub fn remove_file(&mut self, path: &str) {
        self.index.remove_file(path);
        self.files.remove(path);
    }

    pub fn file_lines(&self, path: &str) -> Option<&[String]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// The occurrence under the cursor, if the file is known and the cursor
    /// is on a symbol.
    pub fn symbol_at(&self, path: &str, position: Position) -> Option<Occurrence> {
        let lines = self.files.get(path)?;
        self.dialect.extract_symbol(path, lines, position)
    }

    pub fn goto_definition(&self, path: &str, position: Position) -> GotoResult {
        match self.files.get(path) {
            Some(lines) => {
                super::goto_definition(self.dialect.as_ref(), &self.index, path, lines, position)
            }
            None => GotoResult::empty(),
        }
    }

    pub fn find_references(
        &self,
        path: &str,
        position: Position,
        include_declaration: bool,
    ) -> ReferenceResult {
        match self.files.get(path) {
            Some(lines) => super::find_references(
                self.dialect.as_ref(),
                &self.index,
                path,
                lines,
                position,
                include_declaration,
            ),
            None => ReferenceResult::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Gem5Dialect;

    fn host() -> AnalysisHost {
        AnalysisHost::new(Arc::new(Gem5Dialect::new().unwrap()))
    }

    #[test]
    fn test_goto_definition_across_languages() {
        let mut host = host();
        host.set_file_content(
            "src/mem/cache/cache.hh",
            "namespace gem5 {\nclass Cache : public BaseCache\n{",
        );
        host.set_file_content("configs/common/Caches.py", "l1 = Cache(size='32kB')");

        let result = host.goto_definition("configs/common/Caches.py", Position::new(0, 6));

        assert_eq!(result.source.as_ref().map(Occurrence::key), Some("Cache"));
        assert_eq!(result.targets.len(), 1);
        assert_eq!(result.targets[0].path(), "src/mem/cache/cache.hh");
        assert_eq!(result.targets[0].range().start.line, 1);
    }

    #[test]
    fn test_goto_unknown_file_is_empty() {
        let host = host();
        assert!(host.goto_definition("nope.py", Position::new(0, 0)).is_empty());
        assert!(host.symbol_at("nope.py", Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_find_references_with_and_without_declaration() {
        let mut host = host();
        host.set_file_content("src/sim/Process.py", "class Process(SimObject):");
        host.set_file_content("configs/se.py", "p = Process()\nq = Process(cmd)");

        // The call inside the class statement counts too
        let refs = host.find_references("configs/se.py", Position::new(0, 5), false);
        assert_eq!(refs.len(), 3);
        assert!(refs.references.iter().all(Occurrence::is_reference));

        let refs = host.find_references("configs/se.py", Position::new(0, 5), true);
        assert!(refs.references[0].is_definition());
    }

    #[test]
    fn test_remove_file_drops_definitions() {
        let mut host = host();
        host.set_file_content("src/a.hh", "class Foo {");
        host.set_file_content("configs/b.py", "Foo()");
        host.remove_file("src/a.hh");

        assert_eq!(host.file_count(), 1);
        assert!(host.goto_definition("configs/b.py", Position::new(0, 1)).is_empty());
    }
}
