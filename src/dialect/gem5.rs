//! gem5 convention: C++ `SimObject`s mirrored by Python config classes.
//!
//! Native side: class/struct declarations in headers and out-of-line
//! constructor/destructor definitions (`Foo::Foo`, `Foo::~Foo`).
//! Scripting side: Python classes and functions as definitions, and calls,
//! base lists and attribute access as references.
//!
//! Reference patterns over-match on purpose. Anything that does not resolve
//! against a known definition is dropped by the index.

use std::path::{Path, PathBuf};

use crate::base::NavError;
use crate::pattern::{PatternMatcher, define_key, reference_key};
use crate::symbols::Occurrence;

use super::{Dialect, SourceKind};

/// An ASCII identifier that is not the prefix of a longer Unicode word.
const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*(?![\p{L}\p{N}_])";

/// Every matcher the gem5 dialect uses, in declaration order.
#[derive(Debug, Clone)]
pub struct Gem5Patterns {
    /// `class Foo` / `struct Foo`, not a forward declaration.
    pub class_header: PatternMatcher,
    /// `Foo::Foo` / `Foo::~Foo`; the qualifier must repeat the name.
    pub out_of_line: PatternMatcher,
    /// `class Foo(Base, ...)`.
    pub class_def: PatternMatcher,
    /// `Foo(`.
    pub call: PatternMatcher,
    /// `Foo` inside `(...)`, delimited by `(`, `,` and `)`.
    pub base_list: PatternMatcher,
    /// `foo.` followed by an attribute name.
    pub dot_access: PatternMatcher,
    /// `def foo(`.
    pub def_func: PatternMatcher,
    /// Any identifier token.
    pub identifier: PatternMatcher,
    /// `.foo`, the attribute half of a dotted access.
    pub member_access: PatternMatcher,
}

impl Gem5Patterns {
    fn new() -> Result<Self, NavError> {
        Ok(Self {
            class_header: PatternMatcher::search(
                &format!(r"\b(?:class|struct)\s+(?P<key>{IDENT})(?!\s*;)"),
                define_key,
            )?,
            out_of_line: PatternMatcher::search(
                &format!(
                    r"(?<![\p{{L}}\p{{N}}_:])(?P<key>{IDENT})\s*::\s*~?\k<key>(?![\p{{L}}\p{{N}}_])"
                ),
                define_key,
            )?,
            class_def: PatternMatcher::search(
                &format!(r"^\s*class\s+(?P<key>{IDENT})\s*(?:\((?P<base>[^)]*)\)?)?"),
                define_key,
            )?,
            call: PatternMatcher::find_all(
                &format!(r"\b(?P<key>{IDENT})[ \t]*\("),
                reference_key,
            )?,
            base_list: PatternMatcher::find_all(
                &format!(r"(?<=[(,])[ \t]*(?P<key>{IDENT})[ \t]*(?=[,)])"),
                reference_key,
            )?,
            dot_access: PatternMatcher::find_all(
                &format!(r"\b(?P<key>{IDENT})\.(?=[A-Za-z_])"),
                reference_key,
            )?,
            def_func: PatternMatcher::search(
                &format!(r"^\s*(?:async\s+)?def\s+(?P<key>{IDENT})\s*\("),
                define_key,
            )?,
            identifier: PatternMatcher::find_all(&format!(r"\b(?P<key>{IDENT})"), reference_key)?,
            member_access: PatternMatcher::find_all(
                &format!(r"(?<=\.)(?P<key>{IDENT})"),
                reference_key,
            )?,
        })
    }
}

/// Dialect for the gem5 simulator.
#[derive(Debug, Clone)]
pub struct Gem5Dialect {
    patterns: Gem5Patterns,
}

impl Gem5Dialect {
    pub const NAME: &'static str = "gem5";

    /// Files that identify a gem5 checkout.
    pub const MARKERS: &'static [&'static str] = &["SConstruct", "src/python/m5"];

    pub fn new() -> Result<Self, NavError> {
        Ok(Self {
            patterns: Gem5Patterns::new()?,
        })
    }

    pub fn patterns(&self) -> &Gem5Patterns {
        &self.patterns
    }

    /// Definitions in C++ headers and sources.
    pub fn extract_native<S: AsRef<str>>(
        &self,
        path: &str,
        lines: &[S],
        begin: usize,
        end: usize,
    ) -> Vec<Occurrence> {
        let p = &self.patterns;
        let mut results = p.class_header.extract(path, lines, begin, end);
        results.extend(p.out_of_line.extract(path, lines, begin, end));
        tracing::trace!("{} native occurrences in {}", results.len(), path);
        results
    }

    /// Definitions and references in Python sources.
    pub fn extract_scripting<S: AsRef<str>>(
        &self,
        path: &str,
        lines: &[S],
        begin: usize,
        end: usize,
    ) -> Vec<Occurrence> {
        let p = &self.patterns;
        let mut results = p.class_def.extract(path, lines, begin, end);
        results.extend(p.call.extract(path, lines, begin, end));
        results.extend(p.base_list.extract(path, lines, begin, end));
        results.extend(p.dot_access.extract(path, lines, begin, end));
        results.extend(p.def_func.extract(path, lines, begin, end));
        tracing::trace!("{} scripting occurrences in {}", results.len(), path);
        results
    }
}

impl Dialect for Gem5Dialect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(
        &self,
        kind: SourceKind,
        path: &str,
        lines: &[String],
        begin: usize,
        end: usize,
    ) -> Vec<Occurrence> {
        match kind {
            SourceKind::Native => self.extract_native(path, lines, begin, end),
            SourceKind::Scripting => self.extract_scripting(path, lines, begin, end),
        }
    }

    fn identifier(&self) -> &PatternMatcher {
        &self.patterns.identifier
    }

    fn additional_scan_dirs(&self, root: &Path) -> Vec<PathBuf> {
        vec![root.join("configs"), root.join("src")]
    }

    fn markers(&self) -> &'static [&'static str] {
        Self::MARKERS
    }
}
