use std::fmt;

use rand_core::{OsError, OsRng, TryRngCore};

/// Length in bytes of the pepper prefix of every stored secret.
pub const PEPPER_LEN: usize = 32;

/// Value object representing a stored secret: hex(pepper || derived key)
#[derive(Clone, PartialEq, Eq)]
pub struct StoredSecret(String);

impl StoredSecret {
    /// Wrap a value that was produced by a password hasher or read back from the store
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredSecret(..)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PepperError {
    #[error("pepper is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("pepper must be 32 bytes, got {0}")]
    Length(usize),

    #[error("failed to read OS randomness: {0}")]
    Rng(#[from] OsError),
}

/// Process-wide secret mixed into every password derivation.
#[derive(Clone, PartialEq, Eq)]
pub struct Pepper([u8; PEPPER_LEN]);

impl Pepper {
    pub fn generate() -> Result<Self, PepperError> {
        let mut bytes = [0u8; PEPPER_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn from_hex(value: &str) -> Result<Self, PepperError> {
        let decoded = hex::decode(value)?;
        Self::from_slice(&decoded).ok_or(PepperError::Length(decoded.len()))
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; PEPPER_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PEPPER_LEN] {
        &self.0
    }
}

impl fmt::Debug for Pepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pepper(..)")
    }
}
