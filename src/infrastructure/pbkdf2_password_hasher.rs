use constant_time_eq::constant_time_eq;
use sha2::Sha256;

use crate::domain::{
    models::credential::{PEPPER_LEN, Pepper, StoredSecret},
    services::password_service::PasswordHasher,
};

/// Lowest iteration count accepted from configuration.
pub const MIN_ITERATIONS: u32 = 100_000;

/// Length in bytes of the derived key that follows the pepper.
pub const KEY_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256 keyed by a process-wide pepper.
///
/// Stored secrets are `hex(pepper || key)`, so verification recovers the
/// pepper from the secret itself. There is no per-user salt: equal passwords
/// hashed under one pepper produce equal secrets.
#[derive(Clone)]
pub struct Pbkdf2PasswordHasher {
    pepper: Pepper,
    iterations: u32,
}

impl Pbkdf2PasswordHasher {
    pub fn with_iterations(pepper: Pepper, iterations: u32) -> Self {
        Self { pepper, iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    fn derive_key(&self, plain_password: &str, pepper: &[u8]) -> [u8; KEY_LEN] {
        let mut key = [0u8; KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            plain_password.as_bytes(),
            pepper,
            self.iterations,
            &mut key,
        );
        key
    }
}

impl PasswordHasher for Pbkdf2PasswordHasher {
    fn hash(&self, plain_password: &str) -> StoredSecret {
        let pepper = self.pepper.as_bytes();
        let key = self.derive_key(plain_password, pepper);

        let mut raw = Vec::with_capacity(PEPPER_LEN + KEY_LEN);
        raw.extend_from_slice(pepper);
        raw.extend_from_slice(&key);

        StoredSecret::new(hex::encode(raw))
    }

    fn verify(&self, plain_password: &str, stored_secret: &StoredSecret) -> bool {
        let Ok(raw) = hex::decode(stored_secret.as_str()) else {
            return false;
        };
        if raw.len() <= PEPPER_LEN {
            return false;
        }

        let (pepper, expected) = raw.split_at(PEPPER_LEN);
        let key = self.derive_key(plain_password, pepper);

        constant_time_eq(&key, expected)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::config::SecurityConfig;

    // keep the unit tests fast, the cost floor is checked separately
    const TEST_ITERATIONS: u32 = 1_000;

    #[fixture]
    fn hasher() -> Pbkdf2PasswordHasher {
        let pepper = Pepper::from_slice(&[42u8; PEPPER_LEN]).unwrap();
        Pbkdf2PasswordHasher::with_iterations(pepper, TEST_ITERATIONS)
    }

    #[rstest]
    #[case("s3cret")]
    #[case("")]
    #[case("パスワード with spaces")]
    fn test_verify_accepts_own_hash(hasher: Pbkdf2PasswordHasher, #[case] password: &str) {
        let secret = hasher.hash(password);
        assert!(hasher.verify(password, &secret));
    }

    #[rstest]
    fn test_verify_rejects_other_password(hasher: Pbkdf2PasswordHasher) {
        let secret = hasher.hash("s3cret");
        assert!(!hasher.verify("wrong", &secret));
        assert!(!hasher.verify("s3cret ", &secret));
        assert!(!hasher.verify("", &secret));
    }

    #[rstest]
    fn test_hash_is_deterministic_for_one_pepper(hasher: Pbkdf2PasswordHasher) {
        assert_eq!(hasher.hash("same"), hasher.hash("same"));
    }

    #[rstest]
    fn test_secret_layout(hasher: Pbkdf2PasswordHasher) {
        let secret = hasher.hash("s3cret");
        let raw = hex::decode(secret.as_str()).unwrap();

        assert_eq!(raw.len(), PEPPER_LEN + KEY_LEN);
        assert_eq!(&raw[..PEPPER_LEN], &[42u8; PEPPER_LEN]);
        assert!(!secret.as_str().contains("s3cret"));
    }

    #[rstest]
    fn test_verify_uses_pepper_from_secret(hasher: Pbkdf2PasswordHasher) {
        let secret = hasher.hash("s3cret");

        let other_pepper = Pepper::from_slice(&[7u8; PEPPER_LEN]).unwrap();
        let other = Pbkdf2PasswordHasher::with_iterations(other_pepper, TEST_ITERATIONS);

        assert_ne!(other.hash("s3cret"), secret);
        assert!(other.verify("s3cret", &secret));
    }

    #[rstest]
    #[case("")]
    #[case("abcd")]
    #[case(&"00".repeat(PEPPER_LEN))]
    #[case("not hex at all")]
    #[case(&"0".repeat(PEPPER_LEN * 2 + 1))]
    fn test_verify_malformed_secret_is_false(hasher: Pbkdf2PasswordHasher, #[case] raw: &str) {
        let secret = StoredSecret::new(raw.to_string());
        assert!(!hasher.verify("", &secret));
        assert!(!hasher.verify("s3cret", &secret));
    }

    #[rstest]
    fn test_verify_truncated_key_is_false(hasher: Pbkdf2PasswordHasher) {
        let secret = hasher.hash("s3cret");
        let truncated = &secret.as_str()[..secret.as_str().len() - 2];
        assert!(!hasher.verify("s3cret", &StoredSecret::new(truncated.to_string())));
    }

    #[test]
    fn test_default_cost_meets_floor() {
        let iterations = SecurityConfig::default().pbkdf2_iterations;
        let hasher =
            Pbkdf2PasswordHasher::with_iterations(Pepper::generate().unwrap(), iterations);
        assert!(hasher.iterations() >= MIN_ITERATIONS);

        let secret = hasher.hash("s3cret");
        assert!(hasher.verify("s3cret", &secret));
    }
}
