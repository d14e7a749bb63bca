//! Segmentation engine: divide a buffer on a byte or substring separator,
//! tokenize it incrementally, and join parts back together.
//!
//! Segments are ranges into the buffer's content. The destructive variants
//! overwrite separators with terminator bytes so every segment is itself a
//! valid C string in place; [`Strand::remap`] reverses the substitution
//! when the original content is needed again. Callers who must keep the
//! source intact clone first.

use std::ops::Range;

use crate::buf::{required, ReserveError, Strand};
use crate::find::find_bytes;

/// Iteration state for [`Strand::next_token`]. Opaque to callers; one
/// cursor belongs to one buffer for the duration of a scan.
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    state: TokenState,
}

#[derive(Debug, Clone, Copy, Default)]
enum TokenState {
    #[default]
    Start,
    /// Offset of the currently nulled boundary byte.
    At(usize),
    Done,
}

impl TokenCursor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strand {
    /// Number of segments a divide on `sep` would produce, without
    /// modifying the buffer. Always separators + 1.
    pub fn divide_count(&self, sep: u8) -> usize {
        self.as_bytes().iter().filter(|&&b| b == sep).count() + 1
    }

    /// Divide on `sep`, overwriting every separator with a terminator
    /// byte, and return all segment ranges. A trailing separator yields a
    /// trailing empty segment.
    pub fn divide(&mut self, sep: u8) -> Vec<Range<usize>> {
        let mut out = Vec::with_capacity(self.divide_count(sep));
        let mut start = 0;
        for i in 0..self.len() {
            if self.data[i] == sep {
                self.data[i] = 0;
                out.push(start..i);
                start = i + 1;
            }
        }
        out.push(start..self.len());
        out
    }

    /// Divide on `sep` into caller storage: every separator is nulled, the
    /// first `out.len()` segment ranges are written, and the total segment
    /// count is returned (which may exceed the storage).
    pub fn divide_into(&mut self, sep: u8, out: &mut [Range<usize>]) -> usize {
        let mut count = 0;
        let mut start = 0;
        for i in 0..self.len() {
            if self.data[i] == sep {
                self.data[i] = 0;
                if count < out.len() {
                    out[count] = start..i;
                }
                count += 1;
                start = i + 1;
            }
        }
        if count < out.len() {
            out[count] = start..self.len();
        }
        count + 1
    }

    /// Number of segments a divide on the substring `needle` would
    /// produce, without modifying the buffer. An empty needle never
    /// matches, so the whole content is one segment.
    pub fn divide_str_count(&self, needle: &[u8]) -> usize {
        let mut count = 1;
        let mut at = 0;
        while let Some(idx) = find_bytes(&self.as_bytes()[at..], needle) {
            count += 1;
            at += idx + needle.len();
        }
        count
    }

    /// Divide on the substring `needle`. Each boundary consumes the full
    /// needle length, but only the needle's first byte is overwritten with
    /// a terminator (so the segments read as C strings in place and
    /// [`Strand::remap`] can repair the buffer).
    pub fn divide_str(&mut self, needle: &[u8]) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        let mut start = 0;
        while let Some(idx) = find_bytes(&self.as_bytes()[start..], needle) {
            let at = start + idx;
            self.data[at] = 0;
            out.push(start..at);
            start = at + needle.len();
        }
        out.push(start..self.len());
        out
    }

    /// Substring divide into caller storage; same contract as
    /// [`Strand::divide_into`].
    pub fn divide_str_into(&mut self, needle: &[u8], out: &mut [Range<usize>]) -> usize {
        let mut count = 0;
        let mut start = 0;
        while let Some(idx) = find_bytes(&self.as_bytes()[start..], needle) {
            let at = start + idx;
            self.data[at] = 0;
            if count < out.len() {
                out[count] = start..at;
            }
            count += 1;
            start = at + needle.len();
        }
        if count < out.len() {
            out[count] = start..self.len();
        }
        count + 1
    }

    /// Map every `from` byte in the content to `to`. Repairs a divided
    /// buffer when called with `(0, separator)`.
    pub fn remap(&mut self, from: u8, to: u8) {
        for b in self.as_mut_bytes() {
            if *b == from {
                *b = to;
            }
        }
    }

    /// Next token of a delimiter-separated scan, as a range into the
    /// content.
    ///
    /// Start with a fresh [`TokenCursor`]; each call repairs the boundary
    /// byte nulled by the previous one, nulls the next boundary, and
    /// returns the token before it. `None` signals the end of the scan.
    /// Matching the historical contract, a buffer that never contains the
    /// delimiter yields no tokens at all.
    pub fn next_token(&mut self, delim: &[u8], cursor: &mut TokenCursor) -> Option<Range<usize>> {
        match cursor.state {
            TokenState::Done => None,
            TokenState::Start => match find_bytes(self.as_bytes(), delim) {
                None => {
                    cursor.state = TokenState::Done;
                    None
                }
                Some(idx) => {
                    self.data[idx] = 0;
                    cursor.state = TokenState::At(idx);
                    Some(0..idx)
                }
            },
            TokenState::At(mark) => {
                self.data[mark] = delim[0];
                let next = mark + delim.len();
                if next >= self.len() {
                    cursor.state = TokenState::Done;
                    return None;
                }
                match find_bytes(&self.as_bytes()[next..], delim) {
                    None => {
                        cursor.state = TokenState::Done;
                        Some(next..self.len())
                    }
                    Some(idx) => {
                        let at = next + idx;
                        self.data[at] = 0;
                        cursor.state = TokenState::At(at);
                        Some(next..at)
                    }
                }
            }
        }
    }

    /// Join `parts` with `glue` between them, into a new buffer sized
    /// exactly to the sum of part lengths plus `(count - 1)` glue lengths.
    pub fn join(parts: &[&[u8]], glue: &[u8]) -> Result<Strand, ReserveError> {
        let content = parts.iter().map(|p| p.len() as u64).sum::<u64>()
            + glue.len() as u64 * parts.len().saturating_sub(1) as u64;
        let mut out = Strand::with_capacity(required(content)? as usize);
        for (i, part) in parts.iter().enumerate() {
            out.append(part)?;
            if i + 1 < parts.len() {
                out.append(glue)?;
            }
        }
        Ok(out)
    }
}
