use thiserror::Error;

/// Error type for token verification.
///
/// These causes exist for logging and tests; the public verification entry
/// points collapse all of them into a single rejected state.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
