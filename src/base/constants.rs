//! Domain constants: source file extensions per kind.

/// Extensions of native (C/C++) headers and implementation files.
pub const NATIVE_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx"];

/// Extensions of scripting (Python) files.
pub const SCRIPTING_EXTENSIONS: &[&str] = &["py"];

/// Default upper bound on the size of a file the loader will read (~25MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 25_000_000;
