//! In-place path editing: dirname, basename, extension removal.
//!
//! Paths are byte strings with `/` separators; nothing here touches the
//! filesystem.

use strand_core::{ReserveError, Strand};

/// Reduce the buffer to the directory part of a path.
///
/// Without any separator the result is `"."`; a path whose only separator
/// is the leading root reduces to `"/"`.
pub fn to_dirname(s: &mut Strand) -> Result<(), ReserveError> {
    match s.scan_left(b'/', s.len().saturating_sub(1)) {
        None => s.assign(b"."),
        Some(0) => {
            s.truncate(1);
            Ok(())
        }
        Some(i) => {
            s.truncate(i);
            Ok(())
        }
    }
}

/// Reduce the buffer to the file part of a path. A path without any
/// separator is already a basename and stays unchanged.
pub fn to_basename(s: &mut Strand) {
    if let Some(i) = s.scan_left(b'/', s.len().saturating_sub(1)) {
        s.cut(-((i + 1) as i32));
    }
}

/// Cut the content at the first occurrence of `ext`. Returns whether the
/// extension was found.
pub fn drop_extension(s: &mut Strand, ext: &[u8]) -> bool {
    match s.find(ext) {
        Some(i) => {
            s.truncate(i);
            true
        }
        None => false,
    }
}
