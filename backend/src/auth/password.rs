//! Password digests.
//!
//! Unsalted SHA-256 rendered as lowercase hex, matching what the data file already holds.
//! Identical passwords produce identical digests across users.

use sha2::{Digest, Sha256};

use super::constant_time_compare;

/// Hash a plaintext password into its stored form.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    constant_time_compare(&hash_password(plaintext), digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST_HEX_LEN: usize = 64;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[test]
    fn test_distinct_inputs_distinct_digests() {
        assert_ne!(hash_password("secret"), hash_password("Secret"));
        assert_ne!(hash_password(""), hash_password(" "));
    }

    #[test]
    fn test_fixed_length_lowercase_hex() {
        for input in ["", "a", "a much longer passphrase with spaces", "ñandú"] {
            let digest = hash_password(input);
            assert_eq!(digest.len(), DIGEST_HEX_LEN);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_verify_password() {
        let digest = hash_password("hunter2");
        assert!(verify_password("hunter2", &digest));
        assert!(!verify_password("hunter3", &digest));
    }
}
