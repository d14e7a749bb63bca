//! Substring replacement over a buffer.

use strand_core::{find_bytes, ReserveError, Strand};

/// Replace every non-overlapping occurrence of `from` with `to`.
///
/// The result is rebuilt through an exactly-sized scratch buffer and
/// assigned back, so the source reservation only grows when the new
/// content needs it. An empty `from` matches nothing. On growth failure
/// the buffer is unchanged.
pub fn replace(s: &mut Strand, from: &[u8], to: &[u8]) -> Result<(), ReserveError> {
    if from.is_empty() || s.find(from).is_none() {
        return Ok(());
    }

    let mut count: u64 = 0;
    let mut at = 0;
    while let Some(idx) = find_bytes(&s.as_bytes()[at..], from) {
        count += 1;
        at += idx + from.len();
    }
    let content = s.len() as u64 - count * from.len() as u64 + count * to.len() as u64;

    let mut out = Strand::new();
    out.ensure((content + 1) as usize)?;
    let mut at = 0;
    while let Some(idx) = find_bytes(&s.as_bytes()[at..], from) {
        out.append(&s.as_bytes()[at..at + idx])?;
        out.append(to)?;
        at += idx + from.len();
    }
    out.append(&s.as_bytes()[at..])?;

    s.assign(out.as_bytes())
}
