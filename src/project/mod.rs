pub mod file_loader;
pub mod workspace_loader;

pub use file_loader::{collect_file_paths, load_file, scan_roots};
pub use workspace_loader::{LoadReport, LoaderOptions, WorkspaceLoader};
