use satchel::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_password() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert_ne!(hash, "correct horse battery staple");
    assert!(verify_password("correct horse battery staple", &hash).unwrap());
    assert!(!verify_password("wrong password", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("secret").unwrap();
    let second = hash_password("secret").unwrap();

    // bcrypt salts every hash.
    assert_ne!(first, second);
    assert!(verify_password("secret", &first).unwrap());
    assert!(verify_password("secret", &second).unwrap());
}
