use rollcall_kernel::{is_receipt_id, receipt_id};

#[test]
fn generates_expected_length_and_charset() {
    let id = receipt_id();
    assert_eq!(id.len(), 12);
    assert!(is_receipt_id(&id), "unexpected character in receipt id: {id}");
}

#[test]
fn ids_are_unique_enough_for_a_session() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(receipt_id()), "duplicate receipt id generated");
    }
}

#[test]
fn rejects_ambiguous_characters() {
    assert!(!is_receipt_id("O0Il11111111"));
    assert!(!is_receipt_id("short"));
}
