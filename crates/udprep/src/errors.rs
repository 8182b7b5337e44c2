//! # Error Types

use std::path::PathBuf;

/// Errors from udprep operations.
#[derive(Debug, thiserror::Error)]
pub enum UdprepError {
    /// A vocabulary was fitted from an empty class set.
    #[error("cannot fit a label vocabulary from an empty class set")]
    EmptyClasses,

    /// The pad label appeared among the fitted classes.
    #[error("pad label {pad:?} collides with a fitted class")]
    PadCollision {
        /// The reserved pad label.
        pad: String,
    },

    /// The class count (plus pad) exceeds the capacity of the code type.
    #[error("vocab size ({size}) exceeds code type capacity")]
    CodeSpaceOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A label absent at fit time was encoded.
    #[error("unknown label: {label:?}")]
    UnknownLabel {
        /// The unseen label.
        label: String,
    },

    /// A code outside ``[0, pad_code]`` was decoded.
    #[error("code {code} out of range (pad code is {pad_code})")]
    CodeOutOfRange {
        /// The offending code, in decimal; codes wider than ``usize`` are kept intact.
        code: String,
        /// The largest valid code.
        pad_code: usize,
    },

    /// A vocabulary was loaded before it was ever saved.
    #[error("no {name} vocabulary saved under namespace {}", namespace.display())]
    VocabNotFound {
        /// The namespace searched.
        namespace: PathBuf,
        /// The vocabulary name.
        name: String,
    },

    /// The vocabularies under a namespace were not saved together.
    #[error("vocabularies under namespace {} come from different saves", namespace.display())]
    InconsistentVocabs {
        /// The namespace loaded.
        namespace: PathBuf,
    },

    /// Random access past the end of a dataset.
    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The dataset length.
        len: usize,
    },

    /// Malformed edit-script label.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed corpus input.
    #[error("corpus error at line {line}: {message}")]
    Corpus {
        /// 1-based line number in the corpus source.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A decoded code does not name an applicable lemma rule.
    #[error("invalid lemma rule: {0}")]
    InvalidRule(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Vocabulary (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error from the blob store.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result type for udprep operations.
pub type UDResult<T> = core::result::Result<T, UdprepError>;
