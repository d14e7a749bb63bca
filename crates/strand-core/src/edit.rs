//! Splice engine: structural edits over the buffer content.
//!
//! Every edit follows one pattern: ensure capacity, move one contiguous
//! block, update length and terminator. Positions are signed: negative
//! values count back from the end (`-1` is the last byte), positive values
//! are clamped to the current length, so out-of-range positions land on a
//! well-defined boundary instead of failing.

use std::fmt;

use crate::buf::{required, ReserveError, Size, Strand};

impl Strand {
    /// Resolve a signed position against the current length.
    ///
    /// Negative positions count back from the end and saturate at the
    /// start; positive positions are clamped to `len`. For a buffer of
    /// length 4 the valid positions are:
    ///
    /// ```text
    /// bytes:     a  b  c  d  \0
    /// positive:  0  1  2  3  4
    /// negative: -4 -3 -2 -1
    /// ```
    pub fn norm(&self, pos: i32) -> usize {
        if pos < 0 {
            self.len().saturating_sub(pos.unsigned_abs() as usize)
        } else {
            (pos as usize).min(self.len())
        }
    }

    /// Replace the content, growing the reservation if needed.
    pub fn assign(&mut self, bytes: &[u8]) -> Result<(), ReserveError> {
        self.ensure(required(bytes.len() as u64)? as usize)?;
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len() as Size;
        self.term();
        Ok(())
    }

    /// Append `bytes` at the tail.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), ReserveError> {
        self.ensure(required(self.len as u64 + bytes.len() as u64)? as usize)?;
        let at = self.len as usize;
        self.data[at..at + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len() as Size;
        self.term();
        Ok(())
    }

    /// Insert `bytes` at `pos`, shifting the tail right. Inserting at the
    /// end (or past it) is a pure append. Cost is O(len - pos + n).
    pub fn insert(&mut self, pos: i32, bytes: &[u8]) -> Result<(), ReserveError> {
        self.ensure(required(self.len as u64 + bytes.len() as u64)? as usize)?;
        let pos = self.norm(pos);
        let len = self.len as usize;
        let n = bytes.len();
        self.data.copy_within(pos..len, pos + n);
        self.data[pos..pos + n].copy_from_slice(bytes);
        self.len += n as Size;
        self.term();
        Ok(())
    }

    /// Insert a single byte at `pos`.
    pub fn insert_byte(&mut self, pos: i32, byte: u8) -> Result<(), ReserveError> {
        self.insert(pos, &[byte])
    }

    /// Remove the byte at `pos`, shifting the tail left. Removing at the
    /// end position is a no-op (there is nothing before the terminator).
    pub fn remove_byte(&mut self, pos: i32) {
        let pos = self.norm(pos);
        let len = self.len as usize;
        if pos == len {
            return;
        }
        self.data.copy_within(pos + 1..len, pos);
        self.len -= 1;
        self.term();
    }

    /// Cut the content down to `pos` bytes. Positions past the current
    /// length are clamped; the reservation is untouched.
    pub fn truncate(&mut self, pos: usize) {
        self.len = self.len.min(pos as Size);
        self.term();
    }

    /// Cut bytes off one end: a positive `count` removes that many bytes
    /// from the tail, a negative one removes them from the head. The
    /// magnitude is clamped to the current length.
    pub fn cut(&mut self, count: i32) {
        let len = self.len as usize;
        let n = (count.unsigned_abs() as usize).min(len);
        if count >= 0 {
            self.truncate(len - n);
        } else {
            self.data.copy_within(n..len, 0);
            self.len -= n as Size;
            self.term();
        }
    }

    /// Keep only the range between positions `a` and `b` (end exclusive),
    /// shifted to the start. The arguments may come in either order.
    pub fn select(&mut self, a: i32, b: i32) {
        let mut an = self.norm(a);
        let mut bn = self.norm(b);
        if bn < an {
            std::mem::swap(&mut an, &mut bn);
        }
        self.data.copy_within(an..bn, 0);
        self.len = (bn - an) as Size;
        self.term();
    }

    /// Append `count` copies of one byte.
    pub fn fill(&mut self, byte: u8, count: usize) -> Result<(), ReserveError> {
        self.ensure(required(self.len as u64 + count as u64)? as usize)?;
        let at = self.len as usize;
        self.data[at..at + count].fill(byte);
        self.len += count as Size;
        self.term();
        Ok(())
    }

    /// Append `count` repetitions of a pattern.
    pub fn fill_pattern(&mut self, pattern: &[u8], count: usize) -> Result<(), ReserveError> {
        let total = pattern.len() as u64 * count as u64;
        self.ensure(required(self.len as u64 + total)? as usize)?;
        let mut at = self.len as usize;
        for _ in 0..count {
            self.data[at..at + pattern.len()].copy_from_slice(pattern);
            at += pattern.len();
        }
        self.len = at as Size;
        self.term();
        Ok(())
    }

    /// Drop the content; the reservation is untouched.
    pub fn clear(&mut self) {
        self.len = 0;
        self.term();
    }
}

/// Appending through the host's formatting machinery: `write!(buf, ...)`.
impl fmt::Write for Strand {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
