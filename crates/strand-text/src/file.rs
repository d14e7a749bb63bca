//! Whole-file transfer in and out of buffers.

use std::io;
use std::path::Path;

use strand_core::Strand;

/// Read a whole file into a buffer sized exactly to the file content.
pub fn read_strand(path: impl AsRef<Path>) -> io::Result<Strand> {
    let bytes = std::fs::read(path)?;
    Ok(Strand::from_bytes(&bytes))
}

/// Write the buffer content (terminator excluded) to a file, replacing
/// whatever was there.
pub fn write_strand(path: impl AsRef<Path>, s: &Strand) -> io::Result<()> {
    std::fs::write(path, s.as_bytes())
}
