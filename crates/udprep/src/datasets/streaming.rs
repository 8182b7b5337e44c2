//! # Streaming Dataset

use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use udprep_blob_store::BlobStore;

use crate::{
    corpus::{ConlluReader, CorpusSource, Sentence},
    datasets::{DatasetOptions, DatasetVocabs, SentenceEncoder, SentenceRecord},
    errors::UDResult,
    types::CodeType,
    vocab::VocabStore,
};

/// A lazily encoded, single-pass dataset over previously saved vocabularies.
///
/// The underlying sentence reader is dropped as soon as it is exhausted or
/// yields its first error; the iterator is fused from then on.
pub struct StreamingDataset<I, T: CodeType = u32> {
    sentences: Option<I>,
    encoder: SentenceEncoder<T>,
}

impl<T: CodeType> StreamingDataset<ConlluReader<BufReader<File>>, T> {
    /// Stream a CoNLL-U file.
    pub fn open_path<P, B>(
        path: P,
        options: &DatasetOptions,
        store: &VocabStore<B>,
    ) -> UDResult<Self>
    where
        P: AsRef<Path>,
        B: BlobStore,
    {
        Self::open(ConlluReader::from_path(path)?, options, store)
    }
}

impl<I, T> StreamingDataset<I, T>
where
    I: Iterator<Item = UDResult<Sentence>>,
    T: CodeType,
{
    /// Stream `sentences`, encoding with the vocabularies saved under
    /// `options.namespace`.
    ///
    /// ## Errors
    /// [`UdprepError::VocabNotFound`](crate::errors::UdprepError::VocabNotFound)
    /// if any of the three vocabularies is missing.
    pub fn open<B: BlobStore>(
        sentences: I,
        options: &DatasetOptions,
        store: &VocabStore<B>,
    ) -> UDResult<Self> {
        let vocabs = DatasetVocabs::load(store, &options.namespace)?;
        log::debug!("loaded vocabs from {}", options.namespace.display());
        Ok(Self::with_vocabs(sentences, vocabs, options))
    }

    /// Stream `sentences` with already loaded vocabularies.
    pub fn with_vocabs(
        sentences: I,
        vocabs: DatasetVocabs<T>,
        options: &DatasetOptions,
    ) -> Self {
        Self {
            sentences: Some(sentences),
            encoder: SentenceEncoder::new(vocabs, options.direction),
        }
    }

    /// Stream a freshly opened pass over `corpus`.
    pub fn from_corpus<C, B>(
        corpus: &C,
        options: &DatasetOptions,
        store: &VocabStore<B>,
    ) -> UDResult<Self>
    where
        C: CorpusSource<Reader = I>,
        B: BlobStore,
    {
        Self::open(corpus.open()?, options, store)
    }

    /// The vocabularies in use.
    pub fn vocabs(&self) -> &DatasetVocabs<T> {
        self.encoder.vocabs()
    }

    /// Has the underlying reader been released?
    pub fn is_closed(&self) -> bool {
        self.sentences.is_none()
    }
}

impl<I, T> Iterator for StreamingDataset<I, T>
where
    I: Iterator<Item = UDResult<Sentence>>,
    T: CodeType,
{
    type Item = UDResult<SentenceRecord<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let sentences = self.sentences.as_mut()?;
        let item = match sentences.next() {
            None => None,
            Some(sentence) => Some(sentence.and_then(|s| self.encoder.encode(&s))),
        };
        if !matches!(item, Some(Ok(_))) {
            self.sentences = None;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use udprep_blob_store::MemoryBlobStore;

    use super::*;
    use crate::{
        corpus::{ConlluText, Token},
        datasets::MaterializedDataset,
        errors::UdprepError,
    };

    const CORPUS: &str = "\
# text = running fast
1\trunning\trun\tVERB\t_\tTense=Pres\t0\troot\t_\t_
2\tfast\tfast\tADV\t_\t_\t1\tadvmod\t_\t_
";

    #[test]
    fn test_missing_vocabs() {
        let store = VocabStore::new(MemoryBlobStore::new());
        let corpus = ConlluText::new(CORPUS);
        let result: UDResult<StreamingDataset<_>> =
            StreamingDataset::from_corpus(&corpus, &DatasetOptions::default(), &store);
        assert!(matches!(result, Err(UdprepError::VocabNotFound { .. })));
    }

    #[test]
    fn test_stream_closes() -> UDResult<()> {
        let store = VocabStore::new(MemoryBlobStore::new());
        let corpus = ConlluText::new(CORPUS);
        let options = DatasetOptions::default();
        let fitted: MaterializedDataset =
            MaterializedDataset::build(&corpus, options.clone(), &store)?;

        let mut stream: StreamingDataset<_> =
            StreamingDataset::from_corpus(&corpus, &options, &store)?;
        assert_eq!(stream.vocabs(), fitted.vocabs());
        assert!(!stream.is_closed());

        assert_eq!(&stream.next().unwrap()?, fitted.get(0)?);
        assert!(stream.next().is_none());
        assert!(stream.is_closed());
        assert!(stream.next().is_none());

        Ok(())
    }

    #[test]
    fn test_stream_stops_at_first_error() -> UDResult<()> {
        let store = VocabStore::new(MemoryBlobStore::new());
        let corpus = ConlluText::new(CORPUS);
        let options = DatasetOptions::default();
        let fitted: MaterializedDataset =
            MaterializedDataset::build(&corpus, options.clone(), &store)?;

        let known = Token::new("fast", "fast", "ADV", "_");
        let unseen = Token::new("fast", "fast", "ADV", "Degree=Cmp");
        let sentences = vec![
            Ok(Sentence::new("fast", vec![known.clone()])),
            Ok(Sentence::new("faster", vec![unseen])),
            Ok(Sentence::new("fast", vec![known])),
        ];

        let mut stream =
            StreamingDataset::with_vocabs(sentences.into_iter(), fitted.vocabs().clone(), &options);
        assert!(stream.next().unwrap().is_ok());
        assert!(matches!(
            stream.next(),
            Some(Err(UdprepError::UnknownLabel { .. }))
        ));
        assert!(stream.is_closed());
        assert!(stream.next().is_none());

        Ok(())
    }
}
