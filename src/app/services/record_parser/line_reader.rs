//! Decoded line scanning over a raw byte source
//!
//! Bytes are pulled from the source in fixed-size chunks, decoded to UTF-8
//! incrementally, and split on `\n`. A single trailing `\r` is removed from
//! each line and a final line without a terminator is still returned.
//! Malformed byte sequences decode to U+FFFD.

use encoding_rs::{CoderResult, Decoder};
use std::io::{self, Read};

const CHUNK_SIZE: usize = 8 * 1024;

/// Streaming line reader yielding decoded text
pub struct LineReader<R> {
    source: R,
    decoder: Decoder,
    chunk: Vec<u8>,
    pending: String,
    start: usize,
    exhausted: bool,
    line_number: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(source: R, decoder: Decoder) -> Self {
        Self {
            source,
            decoder,
            chunk: vec![0; CHUNK_SIZE],
            pending: String::new(),
            start: 0,
            exhausted: false,
            line_number: 0,
        }
    }

    /// 1-based number of the line most recently returned (0 before the first read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next decoded line, or `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(offset) = self.pending[self.start..].find('\n') {
                let end = self.start + offset;
                let line = strip_carriage_return(&self.pending[self.start..end]).to_string();
                self.start = end + 1;
                self.line_number += 1;
                return Ok(Some(line));
            }

            if self.exhausted {
                if self.start < self.pending.len() {
                    let line = strip_carriage_return(&self.pending[self.start..]).to_string();
                    self.start = self.pending.len();
                    self.line_number += 1;
                    return Ok(Some(line));
                }
                return Ok(None);
            }

            self.fill()?;
        }
    }

    /// Decode the next chunk of bytes onto the pending buffer
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.pending.drain(..self.start);
            self.start = 0;
        }

        let read = loop {
            match self.source.read(&mut self.chunk) {
                Ok(read) => break read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        let last = read == 0;

        let mut input = &self.chunk[..read];
        loop {
            let capacity = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "decode buffer overflow"))?;
            self.pending.reserve(capacity);

            let (result, consumed, _) = self.decoder.decode_to_string(input, &mut self.pending, last);
            input = &input[consumed..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        self.exhausted = last;
        Ok(())
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
