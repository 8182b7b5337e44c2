//! # Disk Blob Store

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::{BlobStore, UDPREP_STORE_CONFIG, path_utils};

/// Options for [`DiskBlobStore`].
#[derive(Clone, Default, Debug)]
pub struct DiskBlobStoreOptions {
    /// Optional path to the root directory.
    pub root_dir: Option<PathBuf>,
}

impl DiskBlobStoreOptions {
    /// Set the root directory.
    pub fn with_root_dir<P: AsRef<Path>>(
        mut self,
        root_dir: Option<P>,
    ) -> Self {
        self.root_dir = root_dir.map(|p| p.as_ref().to_path_buf());
        self
    }
}

/// Blob store backed by a directory tree.
///
/// Layout: ``{root}/{namespace}/{name}.json``.
///
/// Writes go to a uniquely named temp file in the namespace directory and are
/// published with a rename, so concurrent writers never share a temp file, and
/// a reader sees either the old blob or the new one.
#[derive(Clone, Debug)]
pub struct DiskBlobStore {
    root_dir: PathBuf,
}

impl DiskBlobStore {
    /// Construct a new [`DiskBlobStore`].
    ///
    /// The root is resolved through [`UDPREP_STORE_CONFIG`]:
    /// the explicit option, then ``$UDPREP_STORE_DIR``, then the platform data dir.
    pub fn new(options: DiskBlobStoreOptions) -> anyhow::Result<Self> {
        let root_dir = UDPREP_STORE_CONFIG
            .resolve_data_dir(options.root_dir)
            .context("failed to resolve store directory")?;

        Ok(Self { root_dir })
    }

    /// Construct a store rooted at `root_dir`.
    ///
    /// Relative namespaces are resolved against `root_dir`; use `"."` to
    /// treat namespaces as paths relative to the working directory.
    pub fn at<P: AsRef<Path>>(root_dir: P) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the directory backing `namespace`.
    ///
    /// * Does not check that the path exists.
    pub fn namespace_dir<N: AsRef<Path>>(
        &self,
        namespace: N,
    ) -> PathBuf {
        path_utils::namespace_dir(&self.root_dir, namespace)
    }

    /// Get the file backing the blob `name` in `namespace`.
    ///
    /// * Does not check that the path exists.
    pub fn blob_path<N: AsRef<Path>>(
        &self,
        namespace: N,
        name: &str,
    ) -> PathBuf {
        path_utils::blob_path(self.namespace_dir(namespace), name)
    }
}

impl BlobStore for DiskBlobStore {
    fn write_blob(
        &self,
        namespace: &Path,
        name: &str,
        data: &[u8],
    ) -> anyhow::Result<()> {
        let dir = self.namespace_dir(namespace);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create namespace dir: {}", dir.display()))?;

        let target = path_utils::blob_path(&dir, name);

        // Dropping the temp file on any error path removes it.
        let mut file = NamedTempFile::new_in(&dir)
            .with_context(|| format!("failed to create temp file in: {}", dir.display()))?;
        file.write_all(data)
            .and_then(|_| file.as_file().sync_all())
            .with_context(|| format!("failed to write blob: {}", target.display()))?;
        file.persist(&target)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to publish blob: {}", target.display()))?;

        log::debug!("wrote blob {} ({} bytes)", target.display(), data.len());
        Ok(())
    }

    fn read_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.blob_path(namespace, name);
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read blob: {}", path.display()))
            }
        }
    }

    fn contains_blob(
        &self,
        namespace: &Path,
        name: &str,
    ) -> anyhow::Result<bool> {
        Ok(self.blob_path(namespace, name).is_file())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, env, ffi::OsString, path::PathBuf, thread};

    use serial_test::serial;
    use tempdir::TempDir;

    use super::*;
    use crate::UDPREP_STORE_DIR;

    #[test]
    #[serial]
    fn test_resolve_root() {
        let orig = env::var(UDPREP_STORE_DIR);

        let user_dir = PathBuf::from("/tmp/udprep/user_root");
        let env_dir = PathBuf::from("/tmp/udprep/env_root");

        unsafe {
            env::set_var(UDPREP_STORE_DIR, env_dir.to_str().unwrap());
        }

        let store = DiskBlobStore::new(
            DiskBlobStoreOptions::default().with_root_dir(Some(user_dir.clone())),
        )
        .unwrap();
        assert_eq!(store.root_dir(), user_dir.as_path());

        let store = DiskBlobStore::new(DiskBlobStoreOptions::default()).unwrap();
        assert_eq!(store.root_dir(), env_dir.as_path());

        match orig {
            Ok(original) => unsafe { env::set_var(UDPREP_STORE_DIR, original) },
            Err(_) => unsafe { env::remove_var(UDPREP_STORE_DIR) },
        }
    }

    #[test]
    fn test_write_creates_namespace() -> anyhow::Result<()> {
        let tmp = TempDir::new("udprep_disk_store")?;
        let store = DiskBlobStore::at(tmp.path());
        let ns = Path::new("model_a");

        assert!(!store.namespace_dir(ns).exists());
        assert_eq!(store.read_blob(ns, "upos")?, None);
        assert!(!store.contains_blob(ns, "upos")?);

        store.write_blob(ns, "upos", b"[1, 2, 3]")?;

        assert!(store.namespace_dir(ns).is_dir());
        assert!(store.contains_blob(ns, "upos")?);
        assert_eq!(store.read_blob(ns, "upos")?, Some(b"[1, 2, 3]".to_vec()));

        let leftovers: Vec<_> = fs::read_dir(store.namespace_dir(ns))?
            .map(|e| e.map(|e| e.file_name()))
            .collect::<Result<_, _>>()?;
        assert_eq!(leftovers, vec![OsString::from("upos.json")]);

        Ok(())
    }

    #[test]
    fn test_overwrite_replaces() -> anyhow::Result<()> {
        let tmp = TempDir::new("udprep_disk_store")?;
        let store = DiskBlobStore::at(tmp.path());
        let ns = Path::new("nested/model");

        store.write_blob(ns, "lemma", b"old")?;
        store.write_blob(ns, "lemma", b"new")?;
        assert_eq!(store.read_blob(ns, "lemma")?, Some(b"new".to_vec()));
        assert_eq!(
            store.blob_path(ns, "lemma"),
            tmp.path().join("nested").join("model").join("lemma.json")
        );

        Ok(())
    }

    #[test]
    fn test_absolute_namespace() -> anyhow::Result<()> {
        let tmp = TempDir::new("udprep_disk_store")?;
        let store = DiskBlobStore::at("/nonexistent/root");
        let ns = tmp.path().join("abs");

        store.write_blob(&ns, "feats", b"x")?;
        assert!(ns.join("feats.json").is_file());
        assert_eq!(store.read_blob(&ns, "feats")?, Some(b"x".to_vec()));

        Ok(())
    }

    fn entries(dir: &Path) -> anyhow::Result<BTreeSet<OsString>> {
        Ok(fs::read_dir(dir)?
            .map(|e| e.map(|e| e.file_name()))
            .collect::<Result<_, _>>()?)
    }

    #[test]
    fn test_concurrent_writers() -> anyhow::Result<()> {
        let tmp = TempDir::new("udprep_disk_store")?;
        let store = DiskBlobStore::at(tmp.path());
        let ns = Path::new("shared");

        let blobs: Vec<Vec<u8>> = (b'a'..=b'd').map(|b| vec![b; 256 * 1024]).collect();

        thread::scope(|scope| {
            let handles: Vec<_> = blobs
                .iter()
                .map(|blob| {
                    let store = &store;
                    scope.spawn(move || -> anyhow::Result<()> {
                        for _ in 0..8 {
                            store.write_blob(ns, "lemma", blob)?;
                        }
                        Ok(())
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap().unwrap();
            }
        });

        let stored = store.read_blob(ns, "lemma")?.unwrap();
        assert!(blobs.contains(&stored));

        assert_eq!(
            entries(&store.namespace_dir(ns))?,
            BTreeSet::from([OsString::from("lemma.json")])
        );

        Ok(())
    }

    #[test]
    fn test_failed_publish_keeps_store_clean() -> anyhow::Result<()> {
        let tmp = TempDir::new("udprep_disk_store")?;
        let store = DiskBlobStore::at(tmp.path());
        let ns = Path::new("model");

        store.write_blob(ns, "upos", b"old upos")?;

        // A non-empty directory at the target path cannot be replaced.
        let blocker = store.blob_path(ns, "lemma");
        fs::create_dir_all(&blocker)?;
        fs::write(blocker.join("keep"), b"x")?;

        assert!(store.write_blob(ns, "lemma", b"new lemma").is_err());

        assert_eq!(store.read_blob(ns, "upos")?, Some(b"old upos".to_vec()));
        assert!(!store.contains_blob(ns, "lemma")?);
        assert_eq!(
            entries(&store.namespace_dir(ns))?,
            BTreeSet::from([OsString::from("lemma.json"), OsString::from("upos.json")])
        );

        Ok(())
    }
}
