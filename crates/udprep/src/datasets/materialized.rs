//! # Materialized Dataset

use udprep_blob_store::BlobStore;

use crate::{
    corpus::CorpusSource,
    datasets::{DatasetOptions, DatasetVocabs, LabelClasses, SentenceEncoder, SentenceRecord},
    errors::{UDResult, UdprepError},
    types::CodeType,
    vocab::VocabStore,
};

/// A fully encoded, in-memory dataset.
///
/// Building one scans the corpus twice:
/// 1. discover the label classes, then fit and persist the vocabularies;
/// 2. encode every sentence and buffer the records.
#[derive(Debug, Clone)]
pub struct MaterializedDataset<T: CodeType = u32> {
    options: DatasetOptions,
    vocabs: DatasetVocabs<T>,
    records: Vec<SentenceRecord<T>>,
}

impl<T: CodeType> MaterializedDataset<T> {
    /// Fit vocabularies on `corpus`, save them to `store`, and encode the corpus.
    ///
    /// The vocabularies are saved under `options.namespace`, replacing any
    /// previously saved there.
    pub fn build<C, B>(
        corpus: C,
        options: DatasetOptions,
        store: &VocabStore<B>,
    ) -> UDResult<Self>
    where
        C: CorpusSource,
        B: BlobStore,
    {
        let classes = LabelClasses::discover(corpus.open()?, options.direction)?;
        log::info!(
            "discovered {} upos, {} feats, {} {} lemma rules",
            classes.upos().len(),
            classes.feats().len(),
            classes.lemma().len(),
            options.direction,
        );

        let vocabs = DatasetVocabs::fit(&classes)?;
        vocabs.save(store, &options.namespace)?;
        log::info!("saved vocabs to {}", options.namespace.display());

        let encoder = SentenceEncoder::new(vocabs, options.direction);
        let records = corpus
            .open()?
            .map(|sentence| encoder.encode(&sentence?))
            .collect::<UDResult<Vec<_>>>()?;
        log::info!("encoded {} sentences", records.len());

        Ok(Self {
            options,
            vocabs: encoder.vocabs().clone(),
            records,
        })
    }

    /// The options used to build the dataset.
    pub fn options(&self) -> &DatasetOptions {
        &self.options
    }

    /// The fitted vocabularies.
    pub fn vocabs(&self) -> &DatasetVocabs<T> {
        &self.vocabs
    }

    /// The number of sentences.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at `index`.
    ///
    /// ## Errors
    /// [`UdprepError::IndexOutOfRange`] outside ``[0, len)``.
    pub fn get(
        &self,
        index: usize,
    ) -> UDResult<&SentenceRecord<T>> {
        self.records
            .get(index)
            .ok_or(UdprepError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Iterate over the records in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, SentenceRecord<T>> {
        self.records.iter()
    }

    /// Take the records.
    pub fn into_records(self) -> Vec<SentenceRecord<T>> {
        self.records
    }
}

impl<'a, T: CodeType> IntoIterator for &'a MaterializedDataset<T> {
    type Item = &'a SentenceRecord<T>;
    type IntoIter = std::slice::Iter<'a, SentenceRecord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
