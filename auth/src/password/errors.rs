use thiserror::Error;

/// Error type for stored credential decoding.
///
/// Verification collapses these to `false`; they exist so the log line can
/// say why a stored value was rejected.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Stored credential is not valid base64: {0}")]
    Decode(String),

    #[error("Stored credential is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
}
