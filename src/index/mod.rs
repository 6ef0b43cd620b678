//! Symbol index — workspace-wide store of extracted occurrences.
//!
//! Files are added with the occurrences a dialect extracted from them. The
//! index groups them by key so that a reference can be resolved to the set
//! of definitions sharing its key.
//!
//! Reference patterns over-match (any `foo(` is a reference to `foo`), so a
//! reference whose key has no definition anywhere is treated as noise: it
//! stays stored, but lookups never return it.

mod resolve;

pub use resolve::{ResolveResult, SymbolIndex};
