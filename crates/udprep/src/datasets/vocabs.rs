//! # Dataset Vocabularies
//!
//! Class discovery over a corpus, and the three fitted vocabularies
//! (UPOS, feats, lemma rules) that travel together.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use strum::IntoEnumIterator;
use udprep_blob_store::BlobStore;

use crate::{
    corpus::Sentence,
    edit_script::{EditScript, ScriptDirection, lemma_rule},
    errors::{UDResult, UdprepError},
    types::{CodeType, UDHashSet},
    vocab::{LabelVocab, VocabName, VocabRecord, VocabStore},
};

/// A fresh save generation; nanoseconds since the epoch.
fn next_generation() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

/// The closed set of universal part-of-speech tags.
///
/// Always part of the UPOS vocabulary, whatever the corpus contains.
/// ``_`` is the underspecified tag (e.g. on multiword tokens).
pub const KNOWN_UPOS: &[&str] = &[
    "ADJ", "ADP", "ADV", "AUX", "CCONJ", "DET", "INTJ", "NOUN", "NUM", "PART", "PRON", "PROPN",
    "PUNCT", "SCONJ", "SYM", "VERB", "X", "_",
];

/// An insertion-ordered set of labels.
#[derive(Debug, Clone, Default)]
pub struct OrderedClasses {
    order: Vec<String>,
    seen: UDHashSet<String>,
}

impl OrderedClasses {
    /// Add `label` if it is new.
    pub fn insert(
        &mut self,
        label: &str,
    ) {
        if !self.seen.contains(label) {
            self.seen.insert(label.to_string());
            self.order.push(label.to_string());
        }
    }

    /// The labels, in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// The number of distinct labels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The label classes observed in a corpus.
#[derive(Debug, Clone)]
pub struct LabelClasses {
    direction: ScriptDirection,
    upos: OrderedClasses,
    feats: OrderedClasses,
    lemma: OrderedClasses,
}

impl LabelClasses {
    /// Empty observations; the UPOS classes start as [`KNOWN_UPOS`].
    pub fn new(direction: ScriptDirection) -> Self {
        let mut upos = OrderedClasses::default();
        for tag in KNOWN_UPOS {
            upos.insert(tag);
        }
        Self {
            direction,
            upos,
            feats: Default::default(),
            lemma: Default::default(),
        }
    }

    /// Observe every sentence of one corpus pass.
    pub fn discover<I>(
        sentences: I,
        direction: ScriptDirection,
    ) -> UDResult<Self>
    where
        I: IntoIterator<Item = UDResult<Sentence>>,
    {
        let mut classes = Self::new(direction);
        for sentence in sentences {
            classes.observe(&sentence?);
        }
        Ok(classes)
    }

    /// Observe one sentence.
    pub fn observe(
        &mut self,
        sentence: &Sentence,
    ) {
        for token in sentence.tokens() {
            self.upos.insert(token.upos());
            self.feats.insert(token.feats());
            self.lemma
                .insert(&lemma_rule(token.form(), token.lemma(), self.direction));
        }
    }

    /// The lemma-rule direction.
    pub fn direction(&self) -> ScriptDirection {
        self.direction
    }

    /// Observed UPOS tags; [`KNOWN_UPOS`] first.
    pub fn upos(&self) -> &[String] {
        self.upos.as_slice()
    }

    /// Observed feature bundles.
    pub fn feats(&self) -> &[String] {
        self.feats.as_slice()
    }

    /// Observed lemma rules.
    pub fn lemma(&self) -> &[String] {
        self.lemma.as_slice()
    }
}

/// The three vocabularies of a fitted dataset.
///
/// Cheap to clone; the vocabularies are shared.
#[derive(Debug)]
pub struct DatasetVocabs<T: CodeType = u32> {
    upos: Arc<LabelVocab<T>>,
    feats: Arc<LabelVocab<T>>,
    lemma: Arc<LabelVocab<T>>,
}

impl<T: CodeType> Clone for DatasetVocabs<T> {
    fn clone(&self) -> Self {
        Self {
            upos: self.upos.clone(),
            feats: self.feats.clone(),
            lemma: self.lemma.clone(),
        }
    }
}

impl<T: CodeType> PartialEq for DatasetVocabs<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.upos == other.upos && self.feats == other.feats && self.lemma == other.lemma
    }
}

impl<T: CodeType> DatasetVocabs<T> {
    /// Bundle three vocabularies.
    pub fn new(
        upos: impl Into<Arc<LabelVocab<T>>>,
        feats: impl Into<Arc<LabelVocab<T>>>,
        lemma: impl Into<Arc<LabelVocab<T>>>,
    ) -> Self {
        Self {
            upos: upos.into(),
            feats: feats.into(),
            lemma: lemma.into(),
        }
    }

    /// Fit all three vocabularies from observed classes.
    pub fn fit(classes: &LabelClasses) -> UDResult<Self> {
        Ok(Self::new(
            LabelVocab::fit(classes.upos())?,
            LabelVocab::fit(classes.feats())?,
            LabelVocab::fit(classes.lemma())?,
        ))
    }

    /// Load all three vocabularies from `namespace`.
    ///
    /// ## Errors
    /// [`UdprepError::InconsistentVocabs`] if the three were not written by
    /// the same [`DatasetVocabs::save`].
    pub fn load<B, N>(
        store: &VocabStore<B>,
        namespace: N,
    ) -> UDResult<Self>
    where
        B: BlobStore,
        N: AsRef<Path>,
    {
        let namespace = namespace.as_ref();
        let upos = store.load_record(namespace, VocabName::Upos)?;
        let feats = store.load_record(namespace, VocabName::Feats)?;
        let lemma = store.load_record(namespace, VocabName::Lemma)?;

        if upos.generation != feats.generation || upos.generation != lemma.generation {
            return Err(UdprepError::InconsistentVocabs {
                namespace: PathBuf::from(namespace),
            });
        }

        Ok(Self::new(
            LabelVocab::from_record(upos)?,
            LabelVocab::from_record(feats)?,
            LabelVocab::from_record(lemma)?,
        ))
    }

    /// Save all three vocabularies to `namespace`.
    ///
    /// All three records carry one fresh generation; if a write fails
    /// part-way, [`DatasetVocabs::load`] rejects the mixed set.
    pub fn save<B, N>(
        &self,
        store: &VocabStore<B>,
        namespace: N,
    ) -> UDResult<()>
    where
        B: BlobStore,
        N: AsRef<Path>,
    {
        let namespace = namespace.as_ref();
        let generation = Some(next_generation());
        let staged: Vec<(VocabName, VocabRecord)> = VocabName::iter()
            .map(|name| {
                let record = VocabRecord {
                    generation,
                    ..self.get(name).to_record()
                };
                (name, record)
            })
            .collect();

        for (name, record) in &staged {
            store.save_record(namespace, *name, record)?;
        }
        log::debug!(
            "saved vocab generation {generation:?} to {}",
            namespace.display()
        );
        Ok(())
    }

    /// Get a vocabulary by name.
    pub fn get(
        &self,
        name: VocabName,
    ) -> &Arc<LabelVocab<T>> {
        match name {
            VocabName::Upos => &self.upos,
            VocabName::Feats => &self.feats,
            VocabName::Lemma => &self.lemma,
        }
    }

    /// The UPOS vocabulary.
    pub fn upos(&self) -> &Arc<LabelVocab<T>> {
        &self.upos
    }

    /// The feature-bundle vocabulary.
    pub fn feats(&self) -> &Arc<LabelVocab<T>> {
        &self.feats
    }

    /// The lemma-rule vocabulary.
    pub fn lemma(&self) -> &Arc<LabelVocab<T>> {
        &self.lemma
    }

    /// Decode a predicted UPOS code.
    pub fn decode_upos(
        &self,
        code: T,
    ) -> UDResult<&str> {
        self.upos.decode(code)
    }

    /// Decode a predicted feature-bundle code.
    pub fn decode_feats(
        &self,
        code: T,
    ) -> UDResult<&str> {
        self.feats.decode(code)
    }

    /// Decode a predicted lemma-rule code into its [`EditScript`].
    ///
    /// ## Errors
    /// [`UdprepError::InvalidRule`] for the pad code.
    pub fn decode_lemma_rule(
        &self,
        code: T,
    ) -> UDResult<EditScript> {
        if code == self.lemma.pad_code() {
            return Err(UdprepError::InvalidRule(format!(
                "code {code} is the pad code"
            )));
        }
        self.lemma.decode(code)?.parse()
    }

    /// Lemmatize `form` with a predicted lemma-rule code.
    ///
    /// The form is lower-cased, as it was when the rules were derived.
    pub fn lemmatize(
        &self,
        form: &str,
        code: T,
    ) -> UDResult<String> {
        Ok(self.decode_lemma_rule(code)?.apply(&form.to_lowercase()))
    }
}
