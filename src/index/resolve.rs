//! SymbolIndex and key resolution.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::symbols::Occurrence;

/// Per-key occurrence lists, in insertion order.
type KeyMap = IndexMap<SmolStr, Vec<Occurrence>>;

/// Workspace-wide index of definitions and references.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    /// Source of truth: every occurrence, per file, in extraction order.
    by_file: FxHashMap<Arc<str>, Vec<Occurrence>>,
    /// Definitions by key.
    definitions: KeyMap,
    /// References by key (resolved or not).
    references: KeyMap,
}

impl SymbolIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the occurrences of a file, replacing whatever the file held before.
    pub fn add_file(&mut self, path: &str, occurrences: Vec<Occurrence>) {
        self.remove_file(path);

        let mut definitions = 0;
        for occurrence in &occurrences {
            let map = if occurrence.is_definition() {
                definitions += 1;
                &mut self.definitions
            } else {
                &mut self.references
            };
            map.entry(occurrence.symbol().key.clone())
                .or_default()
                .push(occurrence.clone());
        }

        tracing::debug!(
            "Indexed {} definitions, {} references from {}",
            definitions,
            occurrences.len() - definitions,
            path
        );
        self.by_file.insert(Arc::from(path), occurrences);
    }

    /// Remove all occurrences of a file.
    pub fn remove_file(&mut self, path: &str) {
        let Some(old) = self.by_file.remove(path) else {
            return;
        };

        let keys: FxHashSet<&str> = old.iter().map(Occurrence::key).collect();
        for key in keys {
            for map in [&mut self.definitions, &mut self.references] {
                if let Some(list) = map.get_mut(key) {
                    list.retain(|o| o.path() != path);
                    if list.is_empty() {
                        map.shift_remove(key);
                    }
                }
            }
        }
    }

    /// Resolve a key to its definition(s).
    pub fn resolve(&self, key: &str) -> ResolveResult {
        match self.definitions(key) {
            [] => ResolveResult::NotFound,
            [single] => ResolveResult::Found(single.clone()),
            many => ResolveResult::Ambiguous(many.to_vec()),
        }
    }

    /// All definitions of `key`, in insertion order.
    pub fn definitions(&self, key: &str) -> &[Occurrence] {
        self.definitions.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All references to `key`. Empty when `key` has no definition.
    pub fn references(&self, key: &str) -> &[Occurrence] {
        if !self.definitions.contains_key(key) {
            return &[];
        }
        self.references.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of stored references whose key has no definition.
    pub fn unresolved_references(&self) -> usize {
        self.references
            .iter()
            .filter(|(key, _)| !self.definitions.contains_key(key.as_str()))
            .map(|(_, list)| list.len())
            .sum()
    }

    /// Definitions found in one file, in source order.
    pub fn definitions_in_file(&self, path: &str) -> Vec<&Occurrence> {
        self.by_file
            .get(path)
            .map(|list| list.iter().filter(|o| o.is_definition()).collect())
            .unwrap_or_default()
    }

    /// Every key that has at least one definition.
    pub fn defined_keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(SmolStr::as_str)
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.by_file.contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        self.by_file.len()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.values().map(Vec::len).sum()
    }
}

/// Result of resolving a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one definition.
    Found(Occurrence),
    /// Several definitions share the key.
    Ambiguous(Vec<Occurrence>),
    /// No definition.
    NotFound,
}

impl ResolveResult {
    /// Get the resolved definition if unambiguous.
    pub fn occurrence(&self) -> Option<&Occurrence> {
        match self {
            ResolveResult::Found(o) => Some(o),
            _ => None,
        }
    }

    /// Check if resolution was successful.
    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }

    /// Check if the key was ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, ResolveResult::Ambiguous(_))
    }

    /// All candidate definitions, possibly empty.
    pub fn into_vec(self) -> Vec<Occurrence> {
        match self {
            ResolveResult::Found(o) => vec![o],
            ResolveResult::Ambiguous(list) => list,
            ResolveResult::NotFound => Vec::new(),
        }
    }
}
