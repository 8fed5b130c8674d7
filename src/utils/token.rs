use rand::RngCore;

/// Length of an issued token in hex characters (20 random bytes).
pub const TOKEN_LEN: usize = 40;

/// Generates an opaque API token: 20 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_40_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
