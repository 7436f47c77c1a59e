//! Bearer token generation.
//!
//! Tokens are opaque random numeric strings. They carry no claims and have
//! no expiry; an account holds exactly one token for its whole lifetime,
//! and a unique index on `accounts.token` guards against the (astronomically
//! unlikely) collision.

use rand::Rng;

/// Number of decimal digits in a generated token.
pub const TOKEN_LENGTH: usize = 20;

/// Generate a new random numeric token string.
///
/// The first digit is drawn from 1-9 so the token always has exactly
/// [`TOKEN_LENGTH`] significant digits.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let mut token = String::with_capacity(TOKEN_LENGTH);
    token.push(char::from(b'1' + rng.random_range(0..9u8)));
    for _ in 1..TOKEN_LENGTH {
        token.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_numeric_and_fixed_length() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_digit()));
        assert!(!token.starts_with('0'));
    }

    #[test]
    fn test_tokens_are_distinct() {
        // Not a uniqueness proof, just a regression check that the RNG
        // is actually sampled per call.
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
    }
}
