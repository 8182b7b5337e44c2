//! # Path Utilities

use std::path::{Path, PathBuf};

/// File extension for published blobs.
pub const BLOB_EXTENSION: &str = "json";

/// Resolve a namespace against a store root.
///
/// Relative namespaces are nested under `root`; absolute namespaces are used as-is.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
pub fn namespace_dir<R, N>(
    root: R,
    namespace: N,
) -> PathBuf
where
    R: AsRef<Path>,
    N: AsRef<Path>,
{
    root.as_ref().join(namespace)
}

/// The published path of a blob.
///
/// # Arguments
/// * `dir` - the namespace directory.
/// * `name` - the blob name; the file is ``{name}.json``.
pub fn blob_path<D: AsRef<Path>>(
    dir: D,
    name: &str,
) -> PathBuf {
    dir.as_ref().join(format!("{name}.{BLOB_EXTENSION}"))
}
