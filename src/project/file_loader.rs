//! File discovery and reading.
//!
//! Discovery walks the loader's default directories plus the dialect's
//! additional scan directories and keeps every file the dialect assigns a
//! [`SourceKind`](crate::dialect::SourceKind) to.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use walkdir::WalkDir;

use crate::base::{NavError, split_lines};
use crate::dialect::Dialect;

use super::LoaderOptions;

/// Directories to walk for `root`.
///
/// Default directories come first, then the dialect's additional ones. When
/// neither yields anything, the root itself is walked.
pub fn scan_roots(root: &Path, dialect: &dyn Dialect, options: &LoaderOptions) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = options.default_dirs.iter().map(|d| root.join(d)).collect();
    roots.extend(dialect.additional_scan_dirs(root));
    if roots.is_empty() {
        roots.push(root.to_path_buf());
    }
    roots
}

/// Collect every source file under the scan roots of `root`, sorted.
pub fn collect_file_paths(
    root: &Path,
    dialect: &dyn Dialect,
    options: &LoaderOptions,
) -> Result<Vec<PathBuf>, NavError> {
    if !root.is_dir() {
        return Err(NavError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut seen = FxHashSet::default();
    let mut paths = Vec::new();

    for scan_root in scan_roots(root, dialect, options) {
        if !scan_root.is_dir() {
            tracing::debug!("Skipping missing scan directory {}", scan_root.display());
            continue;
        }

        for entry in WalkDir::new(&scan_root).follow_links(options.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                // The scan root itself is unreadable
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() || dialect.source_kind(entry.path()).is_none() {
                continue;
            }

            let too_large = entry
                .metadata()
                .map(|m| m.len() > options.max_file_size)
                .unwrap_or(false);
            if too_large {
                tracing::debug!("Skipping oversized file {}", entry.path().display());
                continue;
            }

            if seen.insert(entry.path().to_path_buf()) {
                paths.push(entry.into_path());
            }
        }
    }

    paths.sort();
    tracing::debug!("Collected {} source files under {}", paths.len(), root.display());
    Ok(paths)
}

/// Read a file and split it into lines.
pub fn load_file(path: &Path) -> Result<Vec<String>, NavError> {
    let content = fs::read_to_string(path)?;
    Ok(split_lines(&content))
}
