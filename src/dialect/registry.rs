//! Static registry of dialects keyed by convention name.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::NavError;

use super::{Dialect, Gem5Dialect};

/// Builds a fresh dialect instance.
pub type DialectConstructor = fn() -> Result<Arc<dyn Dialect>, NavError>;

struct Entry {
    markers: &'static [&'static str],
    constructor: DialectConstructor,
}

/// Maps convention names to dialect constructors.
///
/// Registration order is also detection order.
#[derive(Default)]
pub struct DialectRegistry {
    entries: IndexMap<&'static str, Entry>,
}

impl DialectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every dialect shipped with the crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Gem5Dialect::NAME, Gem5Dialect::MARKERS, gem5);
        registry
    }

    /// Register (or replace) a dialect.
    pub fn register(
        &mut self,
        name: &'static str,
        markers: &'static [&'static str],
        constructor: DialectConstructor,
    ) {
        self.entries.insert(
            name,
            Entry {
                markers,
                constructor,
            },
        );
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Build the dialect registered under `name`.
    pub fn create(&self, name: &str) -> Result<Arc<dyn Dialect>, NavError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| NavError::unknown_dialect(name))?;
        (entry.constructor)()
    }

    /// Name of the first dialect whose markers all exist under `root`.
    ///
    /// Dialects without markers are never detected.
    pub fn detect(&self, root: &Path) -> Option<&'static str> {
        let detected = self
            .entries
            .iter()
            .find(|(_, entry)| {
                !entry.markers.is_empty()
                    && entry.markers.iter().all(|marker| root.join(marker).exists())
            })
            .map(|(name, _)| *name);
        tracing::debug!("Detected dialect {:?} for {}", detected, root.display());
        detected
    }
}

fn gem5() -> Result<Arc<dyn Dialect>, NavError> {
    Ok(Arc::new(Gem5Dialect::new()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_names() {
        let registry = DialectRegistry::with_builtin();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["gem5"]);
    }

    #[test]
    fn test_create_known_dialect() {
        let registry = DialectRegistry::with_builtin();
        let dialect = registry.create("gem5").unwrap();
        assert_eq!(dialect.name(), "gem5");
    }

    #[test]
    fn test_create_unknown_dialect() {
        let registry = DialectRegistry::with_builtin();
        let err = registry.create("tvm").err().unwrap();
        assert!(matches!(err, NavError::UnknownDialect(ref name) if name == "tvm"));
    }

    #[test]
    fn test_detect_requires_all_markers() {
        let temp = TempDir::new().unwrap();
        let registry = DialectRegistry::with_builtin();

        fs::write(temp.path().join("SConstruct"), "").unwrap();
        assert_eq!(registry.detect(temp.path()), None);

        fs::create_dir_all(temp.path().join("src/python/m5")).unwrap();
        assert_eq!(registry.detect(temp.path()), Some("gem5"));
    }
}
