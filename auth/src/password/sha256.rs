use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Digest;
use sha2::Sha256;

use super::codec;
use super::codec::DIGEST_LEN;
use super::codec::SALT_LEN;

/// Password hashing implementation.
///
/// Reproduces the storage scheme the existing account base was created
/// with: a random 16 byte salt stored alongside a SHA-256 digest of the
/// password. The salt is part of the stored layout but is not mixed into
/// the digest; changing that would invalidate every stored credential.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// Generates a fresh random salt per call, so hashing the same password
    /// twice yields different stored values.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Stored credential text (base64 of salt followed by digest)
    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        codec::encode(&salt, &digest(password))
    }

    /// Verify a password against a stored credential.
    ///
    /// All failures collapse to `false`: an undecodable stored value, a
    /// wrong length, and a plain mismatch are indistinguishable to the
    /// caller. The decode cause is logged at debug level.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Stored credential text
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let stored_digest = match codec::decode(stored) {
            // Salt only rides along in the layout; recomputation ignores it
            Ok((_salt, stored_digest)) => stored_digest,
            Err(e) => {
                tracing::debug!(error = %e, "Stored credential rejected");
                return false;
            }
        };

        digest(password) == stored_digest
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn digest(password: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
