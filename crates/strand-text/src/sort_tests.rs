use strand_core::Strand;

use crate::sort::alphabetize;

#[test]
fn alphabetize_orders_by_byte_value() {
    let mut arr = vec![
        Strand::from("pear"),
        Strand::from("apple"),
        Strand::from("Banana"),
        Strand::from("app"),
    ];
    alphabetize(&mut arr);
    let names: Vec<&[u8]> = arr.iter().map(|s| s.as_bytes()).collect();
    // upper-case bytes sort before lower-case ones
    assert_eq!(
        names,
        vec![
            b"Banana".as_slice(),
            b"app".as_slice(),
            b"apple".as_slice(),
            b"pear".as_slice()
        ]
    );
}

#[test]
fn alphabetize_on_empty_slice_is_fine() {
    let mut arr: Vec<Strand> = Vec::new();
    alphabetize(&mut arr);
    assert!(arr.is_empty());
}
