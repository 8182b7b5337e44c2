//! # Label Vocabularies
//!
//! * [`LabelVocab`] - a fitted ``{ label <-> code }`` mapping with a trailing pad code.
//! * [`VocabStore`] - persists vocabularies by ``(namespace, name)``.

pub mod label_vocab;
pub mod vocab_store;

#[doc(inline)]
pub use label_vocab::{LabelVocab, VocabRecord};
#[doc(inline)]
pub use vocab_store::{VocabName, VocabStore};

/// The reserved pad label; always assigned the last code.
pub const PAD_LABEL: &str = "[PAD]";
