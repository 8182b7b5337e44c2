//! # Dataset Options

use std::path::{Path, PathBuf};

use crate::edit_script::ScriptDirection;

/// Default vocabulary namespace.
pub const DEFAULT_NAMESPACE: &str = "udprep";

/// Options shared by [`MaterializedDataset`](super::MaterializedDataset)
/// and [`StreamingDataset`](super::StreamingDataset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetOptions {
    /// Direction of the lemma-rule edit scripts.
    pub direction: ScriptDirection,

    /// Namespace the vocabularies are saved to / loaded from.
    pub namespace: PathBuf,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            direction: ScriptDirection::default(),
            namespace: PathBuf::from(DEFAULT_NAMESPACE),
        }
    }
}

impl DatasetOptions {
    /// Set the edit-script direction.
    pub fn with_direction(
        mut self,
        direction: ScriptDirection,
    ) -> Self {
        self.direction = direction;
        self
    }

    /// Use [`ScriptDirection::Reverse`] scripts when `reverse` is set.
    ///
    /// Recommended for suffixal languages.
    pub fn with_reverse_edits(
        self,
        reverse: bool,
    ) -> Self {
        self.with_direction(ScriptDirection::from_reverse(reverse))
    }

    /// Set the vocabulary namespace.
    pub fn with_namespace<P: AsRef<Path>>(
        mut self,
        namespace: P,
    ) -> Self {
        self.namespace = namespace.as_ref().to_path_buf();
        self
    }
}
