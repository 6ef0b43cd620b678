//! Occurrence model — the output of every extractor.
//!
//! An [`Occurrence`] is either a [`Definition`](Occurrence::Definition) that
//! introduces a key or a [`Reference`](Occurrence::Reference) that uses one.
//! Both carry the same [`Symbol`] payload: the key, the originating path,
//! and the span of the matched token.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::Span;

/// The textual symbol shared by both occurrence kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Case-sensitive symbol key.
    pub key: SmolStr,
    /// Originating file.
    pub path: Arc<str>,
    /// Range of the token within `path`.
    pub range: Span,
}

impl Symbol {
    pub fn new(key: impl Into<SmolStr>, path: Arc<str>, range: Span) -> Self {
        Self {
            key: key.into(),
            path,
            range,
        }
    }
}

/// Whether an occurrence introduces or uses its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceKind {
    Definition,
    Reference,
}

/// A classified symbol mention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// `path`/`range` introduces `key`.
    Definition(Symbol),
    /// `path`/`range` uses `key`, to be resolved against a definition elsewhere.
    Reference(Symbol),
}

impl Occurrence {
    pub fn new(kind: OccurrenceKind, symbol: Symbol) -> Self {
        match kind {
            OccurrenceKind::Definition => Occurrence::Definition(symbol),
            OccurrenceKind::Reference => Occurrence::Reference(symbol),
        }
    }

    pub fn definition(key: impl Into<SmolStr>, path: Arc<str>, range: Span) -> Self {
        Occurrence::Definition(Symbol::new(key, path, range))
    }

    pub fn reference(key: impl Into<SmolStr>, path: Arc<str>, range: Span) -> Self {
        Occurrence::Reference(Symbol::new(key, path, range))
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            Occurrence::Definition(s) | Occurrence::Reference(s) => s,
        }
    }

    pub fn into_symbol(self) -> Symbol {
        match self {
            Occurrence::Definition(s) | Occurrence::Reference(s) => s,
        }
    }

    pub fn kind(&self) -> OccurrenceKind {
        match self {
            Occurrence::Definition(_) => OccurrenceKind::Definition,
            Occurrence::Reference(_) => OccurrenceKind::Reference,
        }
    }

    pub fn key(&self) -> &str {
        &self.symbol().key
    }

    pub fn path(&self) -> &str {
        &self.symbol().path
    }

    pub fn range(&self) -> Span {
        self.symbol().range
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, Occurrence::Definition(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Occurrence::Reference(_))
    }
}
