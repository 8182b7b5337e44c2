//! # udprep-blob-store
//!
//! Opaque blob persistence, keyed by ``(namespace, name)``.
//!
//! * [`DiskBlobStore`] - one directory per namespace, one file per blob.
//! * [`MemoryBlobStore`] - process-local; useful for tests and embedding.
#![warn(missing_docs)]

use std::path::Path;

use crate::path_resolver::PathResolver;

pub mod disk_store;
pub mod memory_store;
pub mod path_resolver;
pub mod path_utils;

pub use disk_store::{DiskBlobStore, DiskBlobStoreOptions};
pub use memory_store::MemoryBlobStore;

/// Environment variable key to override the default store directory.
pub const UDPREP_STORE_DIR: &str = "UDPREP_STORE_DIR";

/// Default [`PathResolver`] for udprep.
pub const UDPREP_STORE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.udprep",
    organization: "",
    application: "udprep",
    data_env_vars: &[UDPREP_STORE_DIR],
};

/// A store of opaque byte blobs.
///
/// Blobs are grouped by `namespace`; a `(namespace, name)` pair names at most one blob.
/// Writes must be all-or-nothing: a reader never observes a partially written blob.
pub trait BlobStore {
    /// Write (or replace) the blob `name` in `namespace`.
    ///
    /// The namespace container is created if absent.
    fn write_blob(
        &self,
        namespace: &Path,
        name: &str,
        data: &[u8],
    ) -> anyhow::Result<()>;

    /// Read the blob `name` from `namespace`.
    ///
    /// ## Returns
    /// `Ok(None)` if no blob was ever written under that key.
    fn read_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<Option<Vec<u8>>>;

    /// Does the blob exist?
    fn contains_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<bool> {
        Ok(self.read_blob(namespace, name)?.is_some())
    }
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn write_blob(
        &self,
        namespace: &Path,
        name: &str,
        data: &[u8],
    ) -> anyhow::Result<()> {
        (**self).write_blob(namespace, name, data)
    }

    fn read_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        (**self).read_blob(namespace, name)
    }

    fn contains_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<bool> {
        (**self).contains_blob(namespace, name)
    }
}
