use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::PasswordError;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// SHA-256 digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Raw length of a decoded stored credential.
pub const CREDENTIAL_LEN: usize = SALT_LEN + DIGEST_LEN;

/// Encode a salt and digest pair into the stored text form.
///
/// The layout is the salt followed by the digest, standard base64 with
/// padding. This matches the format already present in the user store and
/// must not change.
pub fn encode(salt: &[u8; SALT_LEN], digest: &[u8; DIGEST_LEN]) -> String {
    let mut combined = [0u8; CREDENTIAL_LEN];
    combined[..SALT_LEN].copy_from_slice(salt);
    combined[SALT_LEN..].copy_from_slice(digest);
    STANDARD.encode(combined)
}

/// Decode a stored credential back into its salt and digest parts.
///
/// # Errors
/// * `Decode` - text is not valid standard base64
/// * `Length` - decoded value is not exactly 48 bytes
pub fn decode(stored: &str) -> Result<([u8; SALT_LEN], [u8; DIGEST_LEN]), PasswordError> {
    let combined = STANDARD
        .decode(stored)
        .map_err(|e| PasswordError::Decode(e.to_string()))?;

    if combined.len() != CREDENTIAL_LEN {
        return Err(PasswordError::Length {
            expected: CREDENTIAL_LEN,
            actual: combined.len(),
        });
    }

    let mut salt = [0u8; SALT_LEN];
    let mut digest = [0u8; DIGEST_LEN];
    salt.copy_from_slice(&combined[..SALT_LEN]);
    digest.copy_from_slice(&combined[SALT_LEN..]);

    Ok((salt, digest))
}
