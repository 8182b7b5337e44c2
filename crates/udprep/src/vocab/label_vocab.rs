//! # Label Vocabulary

use serde::{Deserialize, Serialize};

use crate::{
    errors::{UDResult, UdprepError},
    types::{CodeType, UDHashMap, hash_map_with_capacity},
    vocab::PAD_LABEL,
};

/// Bidirectional ``{ label <-> code }`` vocabulary.
///
/// Fitted classes get codes ``0..n`` in first-seen order; the pad label
/// [`PAD_LABEL`] always gets code `n`. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct LabelVocab<T: CodeType = u32> {
    /// Fitted classes, followed by the pad label.
    labels: Vec<String>,

    /// ``{ label -> code }``, pad included.
    codes: UDHashMap<String, T>,

    /// The code of the pad label.
    pad_code: T,
}

impl<T: CodeType> PartialEq for LabelVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.labels == other.labels
    }
}

impl<T: CodeType> Eq for LabelVocab<T> {}

impl<T: CodeType> LabelVocab<T> {
    /// Fit a vocabulary over the observed `classes`.
    ///
    /// Duplicates are ignored; codes follow first-seen order.
    ///
    /// ## Errors
    /// * [`UdprepError::EmptyClasses`] if `classes` is empty.
    /// * [`UdprepError::PadCollision`] if [`PAD_LABEL`] is among `classes`.
    /// * [`UdprepError::CodeSpaceOverflow`] if the pad code does not fit in `T`.
    pub fn fit<I, S>(classes: I) -> UDResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes = classes.into_iter();
        let mut labels: Vec<String> = Vec::with_capacity(classes.size_hint().0 + 1);
        let mut codes: UDHashMap<String, T> = hash_map_with_capacity(labels.capacity());

        for class in classes {
            let class = class.as_ref();
            if class == PAD_LABEL {
                return Err(UdprepError::PadCollision {
                    pad: PAD_LABEL.to_string(),
                });
            }
            if codes.contains_key(class) {
                continue;
            }
            let code = T::from_usize(labels.len()).ok_or(UdprepError::CodeSpaceOverflow {
                size: labels.len() + 1,
            })?;
            codes.insert(class.to_string(), code);
            labels.push(class.to_string());
        }

        if labels.is_empty() {
            return Err(UdprepError::EmptyClasses);
        }

        let pad_code = T::from_usize(labels.len()).ok_or(UdprepError::CodeSpaceOverflow {
            size: labels.len() + 1,
        })?;
        codes.insert(PAD_LABEL.to_string(), pad_code);
        labels.push(PAD_LABEL.to_string());

        Ok(Self {
            labels,
            codes,
            pad_code,
        })
    }

    /// The number of codes, pad included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a fitted vocabulary holds at least one class and the pad.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The fitted classes, in code order, without the pad label.
    pub fn classes(&self) -> &[String] {
        &self.labels[..self.labels.len() - 1]
    }

    /// The number of fitted classes; also the pad code.
    pub fn num_classes(&self) -> usize {
        self.labels.len() - 1
    }

    /// The pad label.
    pub fn pad_label(&self) -> &str {
        PAD_LABEL
    }

    /// The pad code; the highest code in the vocabulary.
    pub fn pad_code(&self) -> T {
        self.pad_code
    }

    /// Does the vocabulary know `label`?
    pub fn contains(
        &self,
        label: &str,
    ) -> bool {
        self.codes.contains_key(label)
    }

    /// Encode a label.
    ///
    /// ## Errors
    /// [`UdprepError::UnknownLabel`] if `label` was not seen at fit time.
    pub fn encode(
        &self,
        label: &str,
    ) -> UDResult<T> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| UdprepError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Encode a sequence of labels.
    pub fn encode_all<I, S>(
        &self,
        labels: I,
    ) -> UDResult<Vec<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.encode(label.as_ref()))
            .collect()
    }

    /// Decode a code.
    ///
    /// ## Errors
    /// [`UdprepError::CodeOutOfRange`] if `code` exceeds the pad code.
    pub fn decode(
        &self,
        code: T,
    ) -> UDResult<&str> {
        code.to_usize()
            .and_then(|index| self.labels.get(index))
            .map(String::as_str)
            .ok_or_else(|| UdprepError::CodeOutOfRange {
                code: code.to_string(),
                pad_code: self.num_classes(),
            })
    }

    /// Decode a sequence of codes.
    pub fn decode_all(
        &self,
        codes: &[T],
    ) -> UDResult<Vec<&str>> {
        codes.iter().map(|&code| self.decode(code)).collect()
    }

    /// The serializable form of this vocabulary.
    pub fn to_record(&self) -> VocabRecord {
        VocabRecord {
            pad: PAD_LABEL.to_string(),
            classes: self.classes().to_vec(),
            generation: None,
        }
    }

    /// Re-fit a vocabulary from its serialized form.
    pub fn from_record(record: VocabRecord) -> UDResult<Self> {
        if record.pad != PAD_LABEL {
            return Err(UdprepError::Parse(format!(
                "stored pad label {:?} does not match {PAD_LABEL:?}",
                record.pad
            )));
        }
        Self::fit(record.classes)
    }
}

/// The persisted form of a [`LabelVocab`].
///
/// Codes are implied by position, so loading re-fits and yields the same mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabRecord {
    /// The pad label at fit time.
    pub pad: String,

    /// The fitted classes, in code order.
    pub classes: Vec<String>,

    /// Save generation shared by vocabularies written together.
    ///
    /// Absent for a vocabulary saved on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
}
