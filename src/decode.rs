//! Streaming UTF-8 decoding, one code point at a time.
//!
//! The processor never holds a whole file in memory: each chunk of the
//! buffered reader is fed to an `encoding_rs` decoder, which keeps partial
//! sequences across chunk boundaries, and the decoded text is handed out one
//! code point at a time.

use std::io::{self, BufRead};

use encoding_rs::{Decoder, DecoderResult, UTF_8};

/// Failure while pulling the next code point.
#[derive(Debug)]
pub(crate) enum DecodeError {
    Io(io::Error),
    /// Malformed or truncated sequence starting at this byte offset.
    Invalid { offset: u64 },
}

/// Iterator over the code points of a UTF-8 byte stream.
///
/// Code points decoded before a malformed sequence are still yielded; the
/// error comes after them and ends the iteration.
pub(crate) struct Utf8Chars<R> {
    inner: R,
    decoder: Decoder,
    decoded: String,
    pos: usize,
    /// Bytes consumed from `inner` so far
    offset: u64,
    pending: Option<DecodeError>,
    finished: bool,
}

impl<R: BufRead> Utf8Chars<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            // A BOM is content here and passes through as U+FEFF
            decoder: UTF_8.new_decoder_without_bom_handling(),
            decoded: String::new(),
            pos: 0,
            offset: 0,
            pending: None,
            finished: false,
        }
    }

    /// Decode the next chunk of input into `decoded`.
    fn refill(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.pos = 0;

        let chunk = self.inner.fill_buf()?;
        let last = chunk.is_empty();
        let mut read = 0;
        loop {
            let src = &chunk[read..];
            if let Some(needed) = self
                .decoder
                .max_utf8_buffer_length_without_replacement(src.len())
            {
                self.decoded.reserve(needed);
            }
            let (result, consumed) = self.decoder.decode_to_string_without_replacement(
                src,
                &mut self.decoded,
                last,
            );
            read += consumed;
            match result {
                DecoderResult::InputEmpty => {
                    self.finished = last;
                    break;
                }
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(bad, extra) => {
                    // `read` counts the bad bytes plus `extra` bytes past them
                    let end = self.offset + read as u64;
                    self.pending = Some(DecodeError::Invalid {
                        offset: end - u64::from(extra) - u64::from(bad),
                    });
                    self.finished = true;
                    break;
                }
            }
        }

        self.inner.consume(read);
        self.offset += read as u64;
        Ok(())
    }
}

impl<R: BufRead> Iterator for Utf8Chars<R> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ch) = self.decoded[self.pos..].chars().next() {
                self.pos += ch.len_utf8();
                return Some(Ok(ch));
            }
            if let Some(err) = self.pending.take() {
                return Some(Err(err));
            }
            if self.finished {
                return None;
            }
            if let Err(e) = self.refill() {
                self.finished = true;
                return Some(Err(DecodeError::Io(e)));
            }
        }
    }
}
