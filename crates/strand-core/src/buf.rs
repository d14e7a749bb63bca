//! The buffer type and its capacity engine.
//!
//! A [`Strand`] owns one contiguous allocation holding its content plus a
//! terminating zero byte, so the content is always usable as a C string
//! without copying. Length and reservation are tracked explicitly; growth
//! only happens through [`Strand::ensure`], and always to exactly the
//! requested reservation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Internal size type. Lengths and reservations are bounded 32-bit values.
pub(crate) type Size = u32;

/// Error raised when a buffer cannot grow to a requested reservation.
///
/// The buffer is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReserveError {
    /// The buffer uses adopted fixed-capacity storage and refuses to grow.
    #[error("fixed-capacity buffer holds {capacity} bytes but the operation needs {needed}")]
    Fixed { capacity: usize, needed: usize },
    /// The requested reservation does not fit the 32-bit bookkeeping.
    #[error("requested reservation of {0} bytes exceeds the 32-bit size limit")]
    Overflow(u64),
}

/// Check that a byte total fits the 32-bit bookkeeping.
pub(crate) fn check_size(total: u64) -> Result<Size, ReserveError> {
    if total > Size::MAX as u64 {
        Err(ReserveError::Overflow(total))
    } else {
        Ok(total as Size)
    }
}

/// Reservation needed to hold `content` bytes plus the terminator.
pub(crate) fn required(content: u64) -> Result<Size, ReserveError> {
    check_size(content + 1)
}

/// A growable, length-tracked byte-string buffer.
///
/// Invariants, upheld by every public operation:
/// - the physical storage holds exactly `reservation()` bytes,
/// - `len() + 1 <= reservation()` (one byte of the reservation is always
///   spent on the terminator),
/// - `storage[len()] == 0`.
///
/// The content is reachable as a plain slice via [`Strand::as_bytes`] (or
/// `Deref`), and with the terminator included via
/// [`Strand::as_bytes_with_nul`] for C interop.
pub struct Strand {
    /// Physical storage, exactly `cap` bytes.
    pub(crate) data: Box<[u8]>,
    /// Reservation in bytes, terminator slot included.
    pub(crate) cap: Size,
    /// Content bytes, terminator excluded.
    pub(crate) len: Size,
    /// Adopted-storage buffers refuse to grow.
    pub(crate) fixed: bool,
}

fn fit(bytes: usize) -> Size {
    Size::try_from(bytes).expect("buffer size exceeds the 32-bit size limit")
}

impl Strand {
    fn from_parts(bytes: &[u8], res: Size) -> Self {
        debug_assert!(res as usize > bytes.len());
        let mut data = vec![0u8; res as usize].into_boxed_slice();
        data[..bytes.len()].copy_from_slice(bytes);
        Self {
            data,
            cap: res,
            len: bytes.len() as Size,
            fixed: false,
        }
    }

    /// Empty buffer with the minimum reservation.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Empty buffer with a reservation of `res` bytes (at least one byte is
    /// always reserved for the terminator).
    ///
    /// # Panics
    /// Panics if `res` exceeds the 32-bit size limit.
    pub fn with_capacity(res: usize) -> Self {
        Self::from_parts(&[], fit(res.max(1)))
    }

    /// Buffer holding `bytes` with the minimum reservation (`len + 1`).
    ///
    /// # Panics
    /// Panics if the content does not fit the 32-bit size limit.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_parts(bytes, fit(bytes.len() + 1))
    }

    /// Buffer holding `bytes` with a reservation of at least `res` bytes.
    /// The reservation is enlarged if the content would not fit.
    ///
    /// # Panics
    /// Panics if the resulting reservation exceeds the 32-bit size limit.
    pub fn from_bytes_with_capacity(bytes: &[u8], res: usize) -> Self {
        Self::from_parts(bytes, fit(res.max(bytes.len() + 1)))
    }

    /// Adopt a caller-provided allocation as fixed-capacity storage.
    ///
    /// The whole of `storage` becomes the reservation and the buffer starts
    /// empty. A fixed buffer never reallocates: any operation that would
    /// grow past the adopted reservation fails with [`ReserveError::Fixed`].
    ///
    /// # Panics
    /// Panics if `storage` exceeds the 32-bit size limit.
    pub fn adopt(mut storage: Vec<u8>) -> Self {
        if storage.is_empty() {
            storage.push(0);
        }
        let cap = fit(storage.len());
        storage[0] = 0;
        Self {
            data: storage.into_boxed_slice(),
            cap,
            len: 0,
            fixed: true,
        }
    }

    /// Content length in bytes, excluding the terminator. O(1).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current reservation in bytes, terminator slot included. O(1).
    pub fn reservation(&self) -> usize {
        self.cap as usize
    }

    /// Whether the buffer uses adopted fixed-capacity storage.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Content including the terminating zero byte, for APIs that expect a
    /// C-style string. Note that segmentation may leave further zero bytes
    /// inside the content itself.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..self.len as usize + 1]
    }

    /// Mutable view of the content. The terminator stays outside the slice,
    /// so it cannot be clobbered through this view.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data[..self.len as usize]
    }

    /// Rewrite the terminator after `len` changed.
    pub(crate) fn term(&mut self) {
        self.data[self.len as usize] = 0;
    }

    fn realloc(&mut self, res: Size) {
        let mut data = vec![0u8; res as usize].into_boxed_slice();
        let keep = (self.len + 1).min(res) as usize;
        data[..keep].copy_from_slice(&self.data[..keep]);
        self.data = data;
        self.cap = res;
    }

    /// Grow the reservation to exactly `res` bytes if it is currently
    /// smaller; no-op otherwise. Callers pre-compute the reservation they
    /// need, so there is no growth-factor policy here.
    pub fn ensure(&mut self, res: usize) -> Result<(), ReserveError> {
        let res = check_size(res as u64)?;
        if res <= self.cap {
            return Ok(());
        }
        if self.fixed {
            return Err(ReserveError::Fixed {
                capacity: self.cap as usize,
                needed: res as usize,
            });
        }
        self.realloc(res);
        Ok(())
    }

    /// Shrink the reservation to the minimum holding the current content
    /// (`len + 1`). Idempotent; no-op on fixed buffers.
    pub fn shrink_to_fit(&mut self) {
        if self.fixed {
            return;
        }
        let min = self.len + 1;
        if self.cap > min {
            self.realloc(min);
        }
    }

    /// Duplicate with the minimum reservation instead of the source's.
    pub fn compact_clone(&self) -> Self {
        Self::from_bytes(self.as_bytes())
    }
}

impl Default for Strand {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Strand {
    /// Duplicates content and reservation. The clone always owns growable
    /// heap storage, even when the source is fixed.
    fn clone(&self) -> Self {
        Self::from_parts(self.as_bytes(), self.cap)
    }
}

impl Deref for Strand {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for Strand {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<&[u8]> for Strand {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl PartialEq for Strand {
    /// Content equality. Reservation and storage mode are not identity.
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Strand {}

impl PartialOrd for Strand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Strand {
    /// Lexicographic byte order of the content.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for Strand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strand")
            .field("len", &self.len)
            .field("res", &self.cap)
            .field("fixed", &self.fixed)
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
