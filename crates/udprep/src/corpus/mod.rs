//! # Annotated Corpora
//!
//! A corpus is a forward-only stream of [`Sentence`]s; each carries its raw
//! text and its ordered [`Token`]s.
//!
//! A [`CorpusSource`] can be (re)opened as many times as needed; each
//! [`CorpusSource::open`] starts a fresh pass.

mod conllu;

#[doc(inline)]
pub use self::conllu::{ConlluFile, ConlluReader, ConlluText};

use crate::errors::UDResult;

/// One annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    form: String,
    lemma: String,
    upos: String,
    feats: String,
}

impl Token {
    /// Build a token.
    ///
    /// `feats` is an opaque feature-bundle string (e.g. ``"Number=Sing|Person=3"``, or ``"_"``).
    pub fn new(
        form: impl Into<String>,
        lemma: impl Into<String>,
        upos: impl Into<String>,
        feats: impl Into<String>,
    ) -> Self {
        Self {
            form: form.into(),
            lemma: lemma.into(),
            upos: upos.into(),
            feats: feats.into(),
        }
    }

    /// The surface form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// The dictionary lemma.
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// The universal part-of-speech tag.
    pub fn upos(&self) -> &str {
        &self.upos
    }

    /// The morphological feature bundle.
    pub fn feats(&self) -> &str {
        &self.feats
    }
}

/// One annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<Token>,
    ) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// The raw sentence text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Does the sentence have no tokens?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A re-openable corpus.
pub trait CorpusSource {
    /// A single forward pass over the corpus.
    type Reader: Iterator<Item = UDResult<Sentence>>;

    /// Start a new pass.
    fn open(&self) -> UDResult<Self::Reader>;
}

impl<C: CorpusSource + ?Sized> CorpusSource for &C {
    type Reader = C::Reader;

    fn open(&self) -> UDResult<Self::Reader> {
        (**self).open()
    }
}
