//! Lexicographic ordering of buffer arrays.

use strand_core::Strand;

/// Sort buffers into lexicographic byte order. Delegates to the standard
/// comparator sort through `Strand`'s content ordering.
pub fn alphabetize(strands: &mut [Strand]) {
    strands.sort_unstable();
}
