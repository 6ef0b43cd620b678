//! Workspace Loading Tests
//!
//! Dialect detection, discovery and parallel indexing of a gem5-shaped tree.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ffinav::dialect::{DialectRegistry, Gem5Dialect};
use ffinav::ide::AnalysisHost;
use ffinav::project::{LoaderOptions, WorkspaceLoader};
use ffinav::{NavError, Position};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn gem5_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "SConstruct", "Export('env')\n");
    write(root, "src/python/m5/__init__.py", "import internal\n");
    write(
        root,
        "src/mem/cache/cache.hh",
        "namespace gem5\n{\n\nclass Cache : public BaseCache\n{\n  public:\n    Cache(const CacheParams &p);\n};\n",
    );
    write(
        root,
        "src/mem/cache/cache.cc",
        "#include \"mem/cache/cache.hh\"\n\nCache::Cache(const CacheParams &p)\n    : BaseCache(p, p.system->cacheLineSize())\n{\n}\n",
    );
    write(
        root,
        "src/mem/cache/Cache.py",
        "class Cache(BaseCache):\n    type = 'Cache'\n",
    );
    write(
        root,
        "configs/common/Caches.py",
        "from m5.objects import *\n\nclass L1Cache(Cache):\n    assoc = 2\n\nl1 = Cache(size='32kB')\n",
    );
    write(root, "docs/notes.txt", "class Cache is documented here\n");
    temp
}

fn gem5_host() -> AnalysisHost {
    AnalysisHost::new(Arc::new(Gem5Dialect::new().unwrap()))
}

fn path_str(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

// ============================================================================
// Detection
// ============================================================================

#[test]
fn test_detect_and_create_dialect() {
    let temp = gem5_tree();
    let registry = DialectRegistry::with_builtin();

    let name = registry.detect(temp.path()).unwrap();
    let dialect = registry.create(name).unwrap();
    assert_eq!(dialect.name(), "gem5");
}

#[test]
fn test_plain_directory_is_not_detected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "main.py", "print('hi')\n");
    assert_eq!(DialectRegistry::with_builtin().detect(temp.path()), None);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_indexes_every_source_file() {
    let temp = gem5_tree();
    let mut host = gem5_host();

    let report = WorkspaceLoader::new()
        .load_into_host(temp.path(), &mut host)
        .unwrap();

    // Five source files under src/ and configs/; docs/ and SConstruct are skipped
    assert_eq!(report.loaded, 5);
    assert!(report.failed.is_empty());
    assert_eq!(host.file_count(), 5);
    assert!(
        host.file_lines(&path_str(temp.path(), "docs/notes.txt"))
            .is_none()
    );
}

#[test]
fn test_load_collects_definitions_from_both_languages() {
    let temp = gem5_tree();
    let mut host = gem5_host();
    WorkspaceLoader::new()
        .load_into_host(temp.path(), &mut host)
        .unwrap();

    let mut files: Vec<_> = host
        .index()
        .definitions("Cache")
        .iter()
        .map(|o| o.path().to_string())
        .collect();
    files.sort();

    assert_eq!(
        files,
        vec![
            path_str(temp.path(), "src/mem/cache/Cache.py"),
            path_str(temp.path(), "src/mem/cache/cache.cc"),
            path_str(temp.path(), "src/mem/cache/cache.hh"),
        ]
    );
}

#[test]
fn test_goto_definition_after_load() {
    let temp = gem5_tree();
    let mut host = gem5_host();
    WorkspaceLoader::new()
        .load_into_host(temp.path(), &mut host)
        .unwrap();

    // `l1 = Cache(size='32kB')`
    let configs = path_str(temp.path(), "configs/common/Caches.py");
    let result = host.goto_definition(&configs, Position::new(5, 7));

    assert_eq!(result.source.as_ref().map(|o| o.key()), Some("Cache"));
    assert_eq!(result.targets.len(), 3);
    assert!(result.targets.iter().all(|o| o.is_definition()));
}

#[test]
fn test_find_references_after_load() {
    let temp = gem5_tree();
    let mut host = gem5_host();
    WorkspaceLoader::new()
        .load_into_host(temp.path(), &mut host)
        .unwrap();

    let header = path_str(temp.path(), "src/mem/cache/cache.hh");
    let refs = host.find_references(&header, Position::new(3, 8), false);

    // `class Cache(` in the script itself, then `class L1Cache(Cache)` and
    // `Cache(size=...)` in configs
    let configs = path_str(temp.path(), "configs/common/Caches.py");
    assert_eq!(refs.len(), 3);
    assert_eq!(
        refs.references
            .iter()
            .filter(|o| o.path() == configs)
            .count(),
        2
    );
    assert!(refs.references.iter().all(|o| o.is_reference()));
}

#[test]
fn test_default_dirs_extend_scan() {
    let temp = gem5_tree();
    write(temp.path(), "tests/gem5/run.py", "Cache()\n");
    let mut host = gem5_host();

    let loader = WorkspaceLoader::with_options(LoaderOptions {
        default_dirs: vec![PathBuf::from("tests")],
        ..LoaderOptions::default()
    });
    let report = loader.load_into_host(temp.path(), &mut host).unwrap();

    assert_eq!(report.loaded, 6);
    assert!(
        host.file_lines(&path_str(temp.path(), "tests/gem5/run.py"))
            .is_some()
    );
}

#[test]
fn test_unreadable_file_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/good.py", "class A(B):\n");
    fs::write(root.join("src/bad.py"), b"x = '\xff\xfe'\n").unwrap();
    let mut host = gem5_host();

    let report = WorkspaceLoader::new().load_into_host(root, &mut host).unwrap();

    assert_eq!(report.loaded, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, root.join("src/bad.py"));
    assert!(host.file_lines(&path_str(root, "src/good.py")).is_some());
    assert!(host.file_lines(&path_str(root, "src/bad.py")).is_none());
    assert_eq!(host.index().definitions("A").len(), 1);
}

#[test]
fn test_loader_options() {
    let loader = WorkspaceLoader::new();
    assert!(loader.options().default_dirs.is_empty());
    assert!(!loader.options().follow_links);

    let loader = WorkspaceLoader::with_options(LoaderOptions {
        max_file_size: 10,
        ..LoaderOptions::default()
    });
    assert_eq!(loader.options().max_file_size, 10);
}

#[test]
fn test_reload_replaces_file() {
    let temp = gem5_tree();
    let mut host = gem5_host();
    let loader = WorkspaceLoader::new();
    loader.load_into_host(temp.path(), &mut host).unwrap();

    let script = temp.path().join("src/mem/cache/Cache.py");
    fs::write(&script, "class Renamed(BaseCache):\n").unwrap();
    loader.load_file_into_host(&script, &mut host).unwrap();

    assert_eq!(host.index().definitions("Cache").len(), 2);
    assert_eq!(host.index().definitions("Renamed").len(), 1);
    assert_eq!(host.file_count(), 5);
}

#[test]
fn test_missing_root_is_error() {
    let temp = TempDir::new().unwrap();
    let mut host = gem5_host();

    let err = WorkspaceLoader::new()
        .load_into_host(&temp.path().join("nope"), &mut host)
        .unwrap_err();
    assert!(matches!(err, NavError::DirectoryNotFound(_)));
}
