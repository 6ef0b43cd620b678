use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::base::NavError;
use crate::base::constants::DEFAULT_MAX_FILE_SIZE;
use crate::ide::AnalysisHost;

use super::file_loader;

/// Options controlling project discovery.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Directories (relative to the root) always scanned, before the
    /// dialect's additional ones.
    pub default_dirs: Vec<PathBuf>,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            default_dirs: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            follow_links: false,
        }
    }
}

/// Outcome of loading a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files read and indexed.
    pub loaded: usize,
    /// Files that could not be read, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

/// Loads a project's source files into an [`AnalysisHost`].
#[derive(Debug, Clone, Default)]
pub struct WorkspaceLoader {
    options: LoaderOptions,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Discover, read and extract every source file under `root`.
    ///
    /// Reading and extraction run in parallel. A file that cannot be read is
    /// reported in [`LoadReport::failed`] and does not abort the load.
    pub fn load_into_host(
        &self,
        root: &Path,
        host: &mut AnalysisHost,
    ) -> Result<LoadReport, NavError> {
        let dialect = host.dialect().clone();
        let paths = file_loader::collect_file_paths(root, dialect.as_ref(), &self.options)?;

        let loaded: Vec<_> = paths
            .par_iter()
            .map(|path| {
                let key = path.to_string_lossy().into_owned();
                let extracted = file_loader::load_file(path).map(|lines| {
                    let occurrences = dialect.extract_file(&key, &lines);
                    (lines, occurrences)
                });
                (path, key, extracted)
            })
            .collect();

        let mut report = LoadReport::default();
        for (path, key, extracted) in loaded {
            match extracted {
                Ok((lines, occurrences)) => {
                    host.insert_file(&key, lines, occurrences);
                    report.loaded += 1;
                }
                Err(err) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), err);
                    report.failed.push((path.clone(), err.to_string()));
                }
            }
        }

        tracing::debug!(
            "Loaded {} file(s) from {} ({} failed, {} definitions)",
            report.loaded,
            root.display(),
            report.failed.len(),
            host.index().definition_count()
        );
        Ok(report)
    }

    /// Read and index a single file.
    pub fn load_file_into_host(
        &self,
        path: &Path,
        host: &mut AnalysisHost,
    ) -> Result<(), NavError> {
        let lines = file_loader::load_file(path)?;
        host.set_file_lines(&path.to_string_lossy(), lines);
        Ok(())
    }
}
