pub mod codec;
pub mod errors;
pub mod sha256;

pub use errors::PasswordError;
pub use sha256::PasswordHasher;
