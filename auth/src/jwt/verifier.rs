use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Identity;
use super::claims::TokenClaims;
use super::errors::TokenError;

/// Outcome of checking a request's `Authorization` header.
///
/// Both middleware variants branch on this; only the mapping from outcome to
/// response differs between them.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Header carried a valid bearer token.
    Authenticated(Identity),
    /// Header absent or not of the form `Bearer <token>`.
    MissingHeader,
    /// Bearer token present but failed verification.
    InvalidToken,
}

/// Verifier for HS256 access tokens.
///
/// Holds the decoding key derived from the shared token secret. Construct
/// once at startup and share behind an `Arc`.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a new verifier from the shared token secret.
    ///
    /// Expiry is enforced with zero leeway: a token is rejected the moment
    /// its `exp` claim passes.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decode and validate a token, preserving the failure cause.
    ///
    /// # Arguments
    /// * `token` - Encoded token, without the `Bearer ` scheme prefix
    ///
    /// # Returns
    /// The verified claims
    ///
    /// # Errors
    /// * `Malformed` - wrong segment count, undecodable segments, wrong
    ///   algorithm, or a payload missing required claims
    /// * `InvalidSignature` - signature does not match the secret
    /// * `Expired` - `exp` claim is in the past
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }

    /// Verify a token, collapsing every failure to `None`.
    ///
    /// The cause is logged at debug level and not surfaced: callers get a
    /// single check, and an expired token is indistinguishable from a forged
    /// one on the outside.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        match self.decode(token) {
            Ok(claims) => Some(claims.into()),
            Err(e) => {
                tracing::debug!(error = %e, "Access token rejected");
                None
            }
        }
    }

    /// Check a raw `Authorization` header value.
    ///
    /// The scheme match is exact: anything other than `Bearer <token>`
    /// counts as a missing header, the same as no header at all.
    pub fn check_header(&self, header: Option<&str>) -> AuthOutcome {
        let Some(token) = header.and_then(|value| value.strip_prefix("Bearer ")) else {
            return AuthOutcome::MissingHeader;
        };

        match self.verify(token) {
            Some(identity) => AuthOutcome::Authenticated(identity),
            None => AuthOutcome::InvalidToken,
        }
    }
}
