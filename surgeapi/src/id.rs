const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Allocate a fresh entity identifier. Nine base-36 characters give enough
/// room that independently created configurations never collide in practice.
pub fn fresh_id() -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[fastrand::usize(..ID_ALPHABET.len())] as char)
        .collect()
}

#[test]
fn test_fresh_id_shape() {
    let id = fresh_id();
    assert_eq!(id.len(), 9);
    assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    assert_ne!(fresh_id(), fresh_id());
}
