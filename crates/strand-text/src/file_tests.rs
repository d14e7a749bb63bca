use strand_core::Strand;

use crate::file::{read_strand, write_strand};

#[test]
fn write_then_read_round_trips() {
    let text = b"line1\nline2\nline3\nline4\nline5\n";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_file.txt");

    let s = Strand::from_bytes(text);
    write_strand(&path, &s).unwrap();
    let back = read_strand(&path).unwrap();

    assert_eq!(back, s);
    // the buffer is sized exactly to the file
    assert_eq!(back.reservation(), text.len() + 1);
}

#[test]
fn read_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_strand(dir.path().join("absent")).is_err());
}

#[test]
fn write_excludes_the_terminator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out");

    let s = Strand::from_bytes_with_capacity(b"abc", 64);
    write_strand(&path, &s).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"abc");
}
