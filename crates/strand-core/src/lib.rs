#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Growable, length-tracked byte-string buffers with C-string interop.
//!
//! A [`Strand`] is a byte buffer that tracks length and reservation
//! explicitly (O(1) length queries) while keeping its content terminated by
//! a zero byte, so it can be handed to any API expecting a C-style string
//! without copying. On top of the storage model sit:
//!
//! - a capacity engine (`ensure`/`shrink_to_fit`) with exact, caller-driven
//!   reservations,
//! - a splice engine (insert, remove, cut, select, fill) built on block
//!   moves,
//! - a two-pass quick-format engine that sizes its output exactly before
//!   writing,
//! - a segmentation engine (divide, tokenize, join) producing in-place
//!   C-string segments,
//! - read-only search primitives.
//!
//! Buffers are byte sequences, not text: no Unicode awareness, ASCII-only
//! helpers where casing matters. Lengths and reservations are bounded
//! 32-bit values.

mod buf;
mod edit;
mod find;
mod quickfmt;
mod segment;

pub use buf::{ReserveError, Strand};
pub use find::find_bytes;
pub use quickfmt::{Arg, FormatError};
pub use segment::TokenCursor;

#[cfg(test)]
mod find_tests;
