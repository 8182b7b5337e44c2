//! # Vocabulary Store

use std::path::{Path, PathBuf};

use udprep_blob_store::{BlobStore, DiskBlobStore, DiskBlobStoreOptions};

use crate::{
    errors::{UDResult, UdprepError},
    types::CodeType,
    vocab::{LabelVocab, VocabRecord},
};

/// The three vocabularies persisted per namespace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr
)]
#[strum(serialize_all = "lowercase")]
pub enum VocabName {
    /// Universal part-of-speech tags.
    Upos,

    /// Morphological feature bundles.
    Feats,

    /// Lemma rules (canonical edit-script strings).
    Lemma,
}

/// Saves and loads [`LabelVocab`]s by ``(namespace, name)``.
///
/// Vocabularies are stored as JSON [`VocabRecord`]s in the underlying [`BlobStore`].
#[derive(Debug, Clone, Default)]
pub struct VocabStore<B: BlobStore> {
    blobs: B,
}

impl VocabStore<DiskBlobStore> {
    /// A disk store rooted at `root_dir`.
    pub fn at_dir<P: AsRef<Path>>(root_dir: P) -> Self {
        Self::new(DiskBlobStore::at(root_dir))
    }

    /// A disk store resolved from `options`.
    ///
    /// The root is the explicit option, then ``$UDPREP_STORE_DIR``,
    /// then the platform data dir.
    pub fn with_options(options: DiskBlobStoreOptions) -> UDResult<Self> {
        Ok(Self::new(DiskBlobStore::new(options)?))
    }

    /// A disk store rooted at ``$UDPREP_STORE_DIR``, or the platform data dir.
    pub fn from_env() -> UDResult<Self> {
        Self::with_options(DiskBlobStoreOptions::default())
    }
}

impl<B: BlobStore> VocabStore<B> {
    /// Wrap a blob store.
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// The underlying blob store.
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Persist `vocab` as `name` under `namespace`.
    ///
    /// The namespace is created if absent; an existing vocabulary is replaced.
    pub fn save<T, N>(
        &self,
        namespace: N,
        name: VocabName,
        vocab: &LabelVocab<T>,
    ) -> UDResult<()>
    where
        T: CodeType,
        N: AsRef<Path>,
    {
        self.save_record(namespace, name, &vocab.to_record())
    }

    /// Persist a serialized vocabulary as `name` under `namespace`.
    pub fn save_record<N: AsRef<Path>>(
        &self,
        namespace: N,
        name: VocabName,
        record: &VocabRecord,
    ) -> UDResult<()> {
        let namespace = namespace.as_ref();
        let data = serde_json::to_vec(record)?;
        self.blobs.write_blob(namespace, name.as_ref(), &data)?;
        log::debug!(
            "saved {name} vocab ({} classes) to {}",
            record.classes.len(),
            namespace.display()
        );
        Ok(())
    }

    /// Load the vocabulary `name` from `namespace`.
    ///
    /// ## Errors
    /// [`UdprepError::VocabNotFound`] if it was never saved.
    pub fn load<T, N>(
        &self,
        namespace: N,
        name: VocabName,
    ) -> UDResult<LabelVocab<T>>
    where
        T: CodeType,
        N: AsRef<Path>,
    {
        LabelVocab::from_record(self.load_record(namespace, name)?)
    }

    /// Load the serialized vocabulary `name` from `namespace`.
    ///
    /// ## Errors
    /// [`UdprepError::VocabNotFound`] if it was never saved.
    pub fn load_record<N: AsRef<Path>>(
        &self,
        namespace: N,
        name: VocabName,
    ) -> UDResult<VocabRecord> {
        let namespace = namespace.as_ref();
        let data = self
            .blobs
            .read_blob(namespace, name.as_ref())?
            .ok_or_else(|| UdprepError::VocabNotFound {
                namespace: PathBuf::from(namespace),
                name: name.to_string(),
            })?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Has `name` been saved under `namespace`?
    pub fn contains<N: AsRef<Path>>(
        &self,
        namespace: N,
        name: VocabName,
    ) -> UDResult<bool> {
        Ok(self.blobs.contains_blob(namespace.as_ref(), name.as_ref())?)
    }
}
