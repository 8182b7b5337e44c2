//! # CoNLL-U Token Streams
//!
//! Sentences are parsed by the [`conllu`] crate; this module adapts its
//! graphs to [`Sentence`]s, extracting `FORM`, `LEMMA`, `UPOS`, `FEATS` and
//! the ``# text = ...`` comment.
//!
//! Multiword-token and empty-node lines are skipped by the parser, so a
//! sentence holds its syntactic words only.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Read},
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use ::conllu::io::{ReadSentence, Reader};
use udgraph::{
    graph::{Comment, Node},
    token::Features,
};

use crate::{
    corpus::{CorpusSource, Sentence, Token},
    errors::{UDResult, UdprepError},
};

const TEXT_ATTR: &str = "text";
const UNSPECIFIED: &str = "_";

/// Counts the lines the parser has consumed, for error reporting.
struct LineCounter<R> {
    inner: R,
    lines: Arc<AtomicUsize>,
}

impl<R> LineCounter<R> {
    fn count(
        &self,
        bytes: &[u8],
    ) {
        let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
        self.lines.fetch_add(newlines, Ordering::Relaxed);
    }
}

impl<R: BufRead> Read for LineCounter<R> {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count(&buf[..n]);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for LineCounter<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(
        &mut self,
        amt: usize,
    ) {
        // The buffer is already filled; this does no I/O.
        if let Ok(buf) = self.inner.fill_buf() {
            let newlines = buf[..amt.min(buf.len())]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.lines.fetch_add(newlines, Ordering::Relaxed);
        }
        self.inner.consume(amt);
    }
}

/// Render a feature bundle as its CoNLL-U column, ``_`` when empty.
fn feats_column(features: &Features) -> String {
    if features.is_empty() {
        return UNSPECIFIED.to_string();
    }
    features
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("|")
}

fn sentence_text(comments: &[Comment]) -> Option<String> {
    comments.iter().find_map(|comment| match comment {
        Comment::AttrVal { attr, val } if attr.trim() == TEXT_ATTR => Some(val.trim().to_string()),
        _ => None,
    })
}

/// Streaming CoNLL-U sentence reader.
///
/// The first error (I/O or malformed input) is yielded once, and the reader
/// is fused afterwards.
pub struct ConlluReader<R: BufRead> {
    sentences: Reader<LineCounter<R>>,
    lines: Arc<AtomicUsize>,
    finished: bool,
}

impl ConlluReader<BufReader<File>> {
    /// Open a CoNLL-U file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> UDResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("opened corpus {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ConlluReader<R> {
    /// Read CoNLL-U from a buffered reader.
    pub fn new(reader: R) -> Self {
        let lines = Arc::new(AtomicUsize::new(0));
        Self {
            sentences: Reader::new(LineCounter {
                inner: reader,
                lines: lines.clone(),
            }),
            lines,
            finished: false,
        }
    }

    /// The number of input lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines.load(Ordering::Relaxed)
    }

    fn fail(
        &mut self,
        line: usize,
        message: String,
    ) -> Option<UDResult<Sentence>> {
        self.finished = true;
        Some(Err(UdprepError::Corpus { line, message }))
    }
}

impl<R: BufRead> Iterator for ConlluReader<R> {
    type Item = UDResult<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let start = self.lines_read() + 1;
        let graph = match self.sentences.read_sentence() {
            Ok(Some(graph)) => graph,
            Ok(None) => {
                self.finished = true;
                return None;
            }
            Err(err) => {
                let line = self.lines_read();
                return self.fail(line, err.to_string());
            }
        };

        let Some(text) = sentence_text(graph.comments()) else {
            return self.fail(start, "sentence has no `# text = ...` comment".to_string());
        };

        let tokens = graph
            .iter()
            .filter_map(Node::token)
            .map(|token| {
                Token::new(
                    token.form(),
                    token.lemma().unwrap_or(UNSPECIFIED),
                    token.upos().unwrap_or(UNSPECIFIED),
                    feats_column(token.features()),
                )
            })
            .collect();

        Some(Ok(Sentence::new(text, tokens)))
    }
}

/// A CoNLL-U file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluFile {
    path: PathBuf,
}

impl ConlluFile {
    /// Reference the file at `path`; nothing is opened yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for ConlluFile {
    type Reader = ConlluReader<BufReader<File>>;

    fn open(&self) -> UDResult<Self::Reader> {
        ConlluReader::from_path(&self.path)
    }
}

/// CoNLL-U text held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluText {
    text: String,
}

impl ConlluText {
    /// Wrap CoNLL-U text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CorpusSource for ConlluText {
    type Reader = ConlluReader<Cursor<String>>;

    fn open(&self) -> UDResult<Self::Reader> {
        Ok(ConlluReader::new(Cursor::new(self.text.clone())))
    }
}
