//! # `udprep` Universal Dependencies Dataset Preparation
//!
//! Turns a Universal Dependencies corpus into integer-coded training records
//! for joint POS tagging, morphological tagging, and lemmatization.
//!
//! Lemmas are learned as *lemma rules*: compact, reversible edit scripts that
//! turn a word form into its lemma, so that ``running -> run`` and
//! ``spinning -> spin`` share one class.
//!
//! See:
//! * [`edit_script`] to compute, apply, and (de)serialize lemma rules.
//! * [`vocab`] for label vocabularies and their persistence.
//! * [`corpus`] to read annotated sentences.
//! * [`datasets`] to assemble encoded datasets, materialized or streamed.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::UDHash{*}`` type alias machinery.
//!
//! ## Building a Dataset
//!
//! ```rust,no_run
//! use udprep::{
//!     corpus::ConlluFile,
//!     datasets::{DatasetOptions, MaterializedDataset, StreamingDataset},
//!     vocab::VocabStore,
//! };
//!
//! let store = VocabStore::at_dir("/tmp/udprep");
//! let options = DatasetOptions::default()
//!     .with_reverse_edits(true)
//!     .with_namespace("en_ewt");
//!
//! let train: MaterializedDataset =
//!     MaterializedDataset::build(ConlluFile::new("en_ewt-ud-train.conllu"), options.clone(), &store)?;
//! println!("{} training sentences", train.len());
//!
//! let dev: StreamingDataset<_> =
//!     StreamingDataset::open_path("en_ewt-ud-dev.conllu", &options, &store)?;
//! for record in dev {
//!     let record = record?;
//!     println!("{}: {:?}", record.text, record.upos_codes);
//! }
//! # Ok::<(), udprep::errors::UdprepError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod datasets;
pub mod edit_script;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{UDResult, UdprepError};
