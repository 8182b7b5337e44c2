//! # In-Memory Blob Store

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use parking_lot::RwLock;

use crate::BlobStore;

/// Process-local [`BlobStore`].
///
/// Nothing is written to disk; blobs live as long as the store.
#[derive(Default, Debug)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<(PathBuf, String), Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs, across all namespaces.
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryBlobStore {
    fn write_blob(
        &self,
        namespace: &Path,
        name: &str,
        data: &[u8],
    ) -> anyhow::Result<()> {
        self.blobs
            .write()
            .insert((namespace.to_path_buf(), name.to_string()), data.to_vec());
        Ok(())
    }

    fn read_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self
            .blobs
            .read()
            .get(&(namespace.to_path_buf(), name.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() -> anyhow::Result<()> {
        let store = MemoryBlobStore::new();
        assert!(store.is_empty());

        let a = Path::new("a");
        let b = Path::new("b");

        store.write_blob(a, "upos", b"1")?;
        store.write_blob(b, "upos", b"2")?;
        assert_eq!(store.len(), 2);

        assert_eq!(store.read_blob(a, "upos")?, Some(b"1".to_vec()));
        assert_eq!(store.read_blob(b, "upos")?, Some(b"2".to_vec()));
        assert_eq!(store.read_blob(a, "feats")?, None);
        assert!(!store.contains_blob(a, "feats")?);

        // Through a reference.
        let by_ref = &store;
        by_ref.write_blob(a, "upos", b"3")?;
        assert_eq!(by_ref.read_blob(a, "upos")?, Some(b"3".to_vec()));

        Ok(())
    }
}
