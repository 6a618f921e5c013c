use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside an access token.
///
/// Field names are part of the deployed token format and must not change.
/// Issued tokens always carry an expiry, so `exp` is required; `iat` is
/// recorded at issuance but tolerated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Account identifier the token was issued for.
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Email address recorded at issuance.
    pub email: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// The authenticated principal extracted from a verified token.
///
/// Only token verification produces an `Identity`; middleware and handlers
/// pass it along unchanged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: i64,
    pub email: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
        }
    }
}
