use strand_core::{ReserveError, Strand};

use crate::replace::replace;

#[test]
fn growing_replacement() {
    let mut s = Strand::from_bytes(b"XYabcXYabcXY");
    replace(&mut s, b"XY", b"GIG").unwrap();
    assert_eq!(s.as_bytes(), b"GIGabcGIGabcGIG");
}

#[test]
fn growing_replacement_without_a_trailing_match() {
    let mut s = Strand::from_bytes(b"XYabcXYabc");
    replace(&mut s, b"XY", b"GIG").unwrap();
    assert_eq!(s.as_bytes(), b"GIGabcGIGabc");
}

#[test]
fn shrinking_replacement() {
    let mut s = Strand::from_bytes(b"XYabcXYabc");
    replace(&mut s, b"XY", b"GG").unwrap();
    assert_eq!(s.as_bytes(), b"GGabcGGabc");
}

#[test]
fn replacement_with_an_empty_target_deletes() {
    let mut s = Strand::from_bytes(b"a--b--c");
    replace(&mut s, b"--", b"").unwrap();
    assert_eq!(s.as_bytes(), b"abc");
}

#[test]
fn missing_needle_is_a_noop() {
    let mut s = Strand::from_bytes(b"abc");
    replace(&mut s, b"zz", b"yy").unwrap();
    assert_eq!(s.as_bytes(), b"abc");
}

#[test]
fn empty_needle_is_a_noop() {
    let mut s = Strand::from_bytes(b"abc");
    replace(&mut s, b"", b"yy").unwrap();
    assert_eq!(s.as_bytes(), b"abc");
}

#[test]
fn replace_respects_fixed_capacity() {
    let mut s = Strand::adopt(vec![0u8; 8]);
    s.append(b"aXa").unwrap();
    let err = replace(&mut s, b"X", b"12345678").unwrap_err();
    assert!(matches!(err, ReserveError::Fixed { .. }));
    assert_eq!(s.as_bytes(), b"aXa");
}
