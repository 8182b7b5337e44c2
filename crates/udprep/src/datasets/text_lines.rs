//! # Plain-Text Lines

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use crate::errors::UDResult;

/// Lazily yields the raw lines of a text source, for inference.
///
/// Lines come without their ``\n`` / ``\r\n`` terminator. The source is
/// released on exhaustion, on the first error, or on drop.
pub struct TextLines<R> {
    lines: Option<Lines<R>>,
}

impl TextLines<BufReader<File>> {
    /// Open a text file.
    pub fn open<P: AsRef<Path>>(path: P) -> UDResult<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TextLines<R> {
    /// Read lines from a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: Some(reader.lines()),
        }
    }

    /// Has the source been released?
    pub fn is_closed(&self) -> bool {
        self.lines.is_none()
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = UDResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.as_mut()?.next() {
            Some(Ok(line)) => Some(Ok(line)),
            Some(Err(err)) => {
                self.lines = None;
                Some(Err(err.into()))
            }
            None => {
                self.lines = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempdir::TempDir;

    use super::*;
    use crate::errors::UdprepError;

    #[test]
    fn test_lines() {
        let mut lines = TextLines::new(Cursor::new("The cat sat.\r\n\nIt ran."));
        assert_eq!(lines.next().unwrap().unwrap(), "The cat sat.");
        assert_eq!(lines.next().unwrap().unwrap(), "");
        assert_eq!(lines.next().unwrap().unwrap(), "It ran.");
        assert!(!lines.is_closed());
        assert!(lines.next().is_none());
        assert!(lines.is_closed());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_invalid_utf8() {
        let mut lines = TextLines::new(Cursor::new(b"ok\n\xff\xfe\nmore\n".to_vec()));
        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        assert!(matches!(lines.next(), Some(Err(UdprepError::Io(_)))));
        assert!(lines.is_closed());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_open_file() -> UDResult<()> {
        let tmp = TempDir::new("udprep_text_lines")?;
        let path = tmp.path().join("input.txt");
        File::create(&path)?.write_all(b"one\ntwo\n")?;

        let lines: Vec<String> = TextLines::open(&path)?.collect::<UDResult<_>>()?;
        assert_eq!(lines, vec!["one", "two"]);

        assert!(matches!(
            TextLines::open(tmp.path().join("missing.txt")),
            Err(UdprepError::Io(_))
        ));
        Ok(())
    }
}
