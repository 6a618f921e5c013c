pub mod claims;
pub mod errors;
pub mod verifier;

pub use claims::Identity;
pub use claims::TokenClaims;
pub use errors::TokenError;
pub use verifier::AuthOutcome;
pub use verifier::TokenVerifier;
