//! Credential verification library
//!
//! Provides the credential primitives shared by the backend services:
//! - Salted password hashing (SHA-256, legacy storage format)
//! - JWT access token verification (HS256)
//! - The per-request authorization decision used by HTTP middleware
//!
//! Token issuance lives with the login and registration flows elsewhere; this
//! library only verifies. Every verification path fails closed: bad tokens
//! collapse to `None`, bad credentials to `false`, with the underlying cause
//! available for logging rather than for callers.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let stored = hasher.hash("my_password");
//! assert!(hasher.verify("my_password", &stored));
//! assert!(!hasher.verify("wrong_password", &stored));
//! ```
//!
//! ## Token Verification
//! ```
//! use auth::{AuthOutcome, TokenVerifier};
//!
//! let verifier = TokenVerifier::new(b"secret_key_at_least_32_bytes_long!");
//! assert!(verifier.verify("not.a.token").is_none());
//! assert!(matches!(verifier.check_header(None), AuthOutcome::MissingHeader));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::AuthOutcome;
pub use jwt::Identity;
pub use jwt::TokenClaims;
pub use jwt::TokenError;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
