//! # Sentence Encoder

use crate::{
    corpus::Sentence,
    datasets::DatasetVocabs,
    edit_script::{ScriptDirection, lemma_rule},
    errors::UDResult,
    types::CodeType,
};

/// One encoded sentence.
///
/// The three code sequences all have one entry per token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord<T: CodeType = u32> {
    /// The raw sentence text.
    pub text: String,

    /// UPOS codes.
    pub upos_codes: Vec<T>,

    /// Lemma-rule codes.
    pub lemma_rule_codes: Vec<T>,

    /// Feature-bundle codes.
    pub feats_codes: Vec<T>,
}

impl<T: CodeType> SentenceRecord<T> {
    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.upos_codes.len()
    }

    /// Does the record have no tokens?
    pub fn is_empty(&self) -> bool {
        self.upos_codes.is_empty()
    }
}

/// Encodes [`Sentence`]s into [`SentenceRecord`]s.
///
/// Shared by both dataset assemblers, so a sentence encodes identically
/// whichever one produced it.
#[derive(Debug, Clone)]
pub struct SentenceEncoder<T: CodeType = u32> {
    vocabs: DatasetVocabs<T>,
    direction: ScriptDirection,
}

impl<T: CodeType> SentenceEncoder<T> {
    /// Build an encoder.
    pub fn new(
        vocabs: DatasetVocabs<T>,
        direction: ScriptDirection,
    ) -> Self {
        Self { vocabs, direction }
    }

    /// The vocabularies.
    pub fn vocabs(&self) -> &DatasetVocabs<T> {
        &self.vocabs
    }

    /// The lemma-rule direction.
    pub fn direction(&self) -> ScriptDirection {
        self.direction
    }

    /// Encode one sentence.
    ///
    /// ## Errors
    /// [`UdprepError::UnknownLabel`](crate::errors::UdprepError::UnknownLabel)
    /// for any label the vocabularies were not fitted on.
    pub fn encode(
        &self,
        sentence: &Sentence,
    ) -> UDResult<SentenceRecord<T>> {
        let n = sentence.len();
        let mut record = SentenceRecord {
            text: sentence.text().to_string(),
            upos_codes: Vec::with_capacity(n),
            lemma_rule_codes: Vec::with_capacity(n),
            feats_codes: Vec::with_capacity(n),
        };

        for token in sentence.tokens() {
            let rule = lemma_rule(token.form(), token.lemma(), self.direction);
            record
                .upos_codes
                .push(self.vocabs.upos().encode(token.upos())?);
            record
                .lemma_rule_codes
                .push(self.vocabs.lemma().encode(&rule)?);
            record
                .feats_codes
                .push(self.vocabs.feats().encode(token.feats())?);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        corpus::Token,
        datasets::{KNOWN_UPOS, LabelClasses},
        errors::UdprepError,
    };

    fn sample() -> Sentence {
        Sentence::new(
            "running fast",
            vec![
                Token::new("running", "run", "VERB", "Tense=Pres"),
                Token::new("fast", "fast", "ADV", "_"),
            ],
        )
    }

    #[test]
    fn test_encode_sample() {
        let direction = ScriptDirection::Forward;
        let classes = LabelClasses::discover(vec![Ok(sample())], direction).unwrap();
        let encoder: SentenceEncoder =
            SentenceEncoder::new(DatasetVocabs::fit(&classes).unwrap(), direction);
        assert_eq!(encoder.direction(), direction);

        let record = encoder.encode(&sample()).unwrap();
        assert_eq!(record.text, "running fast");
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());

        let verb = KNOWN_UPOS.iter().position(|&t| t == "VERB").unwrap() as u32;
        let adv = KNOWN_UPOS.iter().position(|&t| t == "ADV").unwrap() as u32;
        assert_eq!(record.upos_codes, vec![verb, adv]);
        assert_eq!(record.lemma_rule_codes, vec![0, 1]);
        assert_eq!(record.feats_codes, vec![0, 1]);

        let vocabs = encoder.vocabs();
        assert_eq!(vocabs.lemma().decode(0).unwrap(), "f|=3|-ning");
        assert_eq!(vocabs.lemma().decode(1).unwrap(), "f");
    }

    #[test]
    fn test_empty_sentence() {
        let classes = LabelClasses::discover(vec![Ok(sample())], ScriptDirection::Reverse).unwrap();
        let encoder: SentenceEncoder<u16> = SentenceEncoder::new(
            DatasetVocabs::fit(&classes).unwrap(),
            ScriptDirection::Reverse,
        );

        let record = encoder.encode(&Sentence::new("", vec![])).unwrap();
        assert!(record.is_empty());
        assert!(record.lemma_rule_codes.is_empty());
        assert!(record.feats_codes.is_empty());
    }

    #[test]
    fn test_unknown_label() {
        let classes = LabelClasses::discover(vec![Ok(sample())], ScriptDirection::Forward).unwrap();
        let encoder: SentenceEncoder = SentenceEncoder::new(
            DatasetVocabs::fit(&classes).unwrap(),
            ScriptDirection::Forward,
        );

        let unseen = Sentence::new(
            "walked",
            vec![Token::new("walked", "walk", "VERB", "Tense=Past")],
        );
        match encoder.encode(&unseen) {
            Err(UdprepError::UnknownLabel { label }) => assert_eq!(label, "f|=4|-ed"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
