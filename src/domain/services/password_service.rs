use crate::domain::models::credential::StoredSecret;

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> StoredSecret;

    /// Verify a plain text password against a stored secret.
    /// Malformed secrets verify as `false`.
    fn verify(&self, plain_password: &str, stored_secret: &StoredSecret) -> bool;
}
