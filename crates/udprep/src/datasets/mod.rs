//! # Datasets
//!
//! Two assemblers turn an annotated corpus into [`SentenceRecord`]s:
//! * [`MaterializedDataset`] - fits and saves the vocabularies, then buffers
//!   every record for random access.
//! * [`StreamingDataset`] - loads saved vocabularies and encodes lazily.
//!
//! Both share one [`SentenceEncoder`], so record `i` is identical either way.
//!
//! [`TextLines`] reads raw text for inference, where there is nothing to encode.

mod encoder;
mod materialized;
mod options;
mod streaming;
mod text_lines;
mod vocabs;

#[doc(inline)]
pub use encoder::{SentenceEncoder, SentenceRecord};
#[doc(inline)]
pub use materialized::MaterializedDataset;
#[doc(inline)]
pub use options::{DEFAULT_NAMESPACE, DatasetOptions};
#[doc(inline)]
pub use streaming::StreamingDataset;
#[doc(inline)]
pub use text_lines::TextLines;
#[doc(inline)]
pub use vocabs::{DatasetVocabs, KNOWN_UPOS, LabelClasses, OrderedClasses};
