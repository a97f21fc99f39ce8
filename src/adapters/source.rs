use crate::core::{Tuple, TupleSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use regex::Regex;
use std::borrow::Cow;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const DEFAULT_DELIMITER: &str = r"\s+";

/// Replays a fixed list of tuples.
#[derive(Debug, Clone, Default)]
pub struct IterSource {
    tuples: VecDeque<Tuple>,
}

impl IterSource {
    pub fn new(tuples: Vec<Tuple>) -> Self {
        Self {
            tuples: tuples.into(),
        }
    }

    /// One single-field tuple per word, in order.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let tuples = words
            .into_iter()
            .map(|w| {
                let word: String = w.into();
                Tuple::new(vec![word.into()])
            })
            .collect();
        Self { tuples }
    }
}

#[async_trait]
impl TupleSource for IterSource {
    async fn next_tuple(&mut self) -> Result<Option<Tuple>> {
        Ok(self.tuples.pop_front())
    }
}

/// Splits lines of text into single-word tuples.
///
/// Lines are split on `delimiter`; empty pieces (leading or trailing delimiters,
/// blank lines) are dropped here, upstream of the counter. Invalid UTF-8 is decoded
/// lossily, so a stray byte becomes U+FFFD instead of ending the stream.
pub struct LineSource<R> {
    reader: R,
    delimiter: Regex,
    lowercase: bool,
    pending: VecDeque<String>,
    buf: Vec<u8>,
    lines_read: u64,
}

impl<R: AsyncBufRead + Unpin + Send> LineSource<R> {
    pub fn new(reader: R, delimiter: &str, lowercase: bool) -> Result<Self> {
        Ok(Self {
            reader,
            delimiter: Regex::new(delimiter)?,
            lowercase,
            pending: VecDeque::new(),
            buf: Vec::new(),
            lines_read: 0,
        })
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    fn split_line(&mut self) {
        let decoded = String::from_utf8_lossy(&self.buf);
        if let Cow::Owned(_) = decoded {
            tracing::warn!("Line {} is not valid UTF-8, decoding lossily", self.lines_read);
        }
        let line = decoded.trim_end_matches(['\n', '\r']);
        for word in self.delimiter.split(line).filter(|w| !w.is_empty()) {
            let word = if self.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            };
            self.pending.push_back(word);
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TupleSource for LineSource<R> {
    async fn next_tuple(&mut self) -> Result<Option<Tuple>> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(Tuple::new(vec![word.into()])));
            }

            self.buf.clear();
            let read = self.reader.read_until(b'\n', &mut self.buf).await?;
            if read == 0 {
                tracing::debug!("Input exhausted after {} lines", self.lines_read);
                return Ok(None);
            }
            self.lines_read += 1;
            self.split_line();
        }
    }
}
