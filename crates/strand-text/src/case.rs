//! ASCII case mapping, in place. Buffers are byte sequences, so only
//! ASCII letters are touched.

use strand_core::Strand;

/// Upper-case the first byte if it is an ASCII letter.
pub fn capitalize(s: &mut Strand) {
    if let Some(b) = s.as_mut_bytes().first_mut() {
        b.make_ascii_uppercase();
    }
}

/// Upper-case every ASCII letter.
pub fn to_uppercase(s: &mut Strand) {
    s.as_mut_bytes().make_ascii_uppercase();
}

/// Lower-case every ASCII letter.
pub fn to_lowercase(s: &mut Strand) {
    s.as_mut_bytes().make_ascii_lowercase();
}
