use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Admin account id.
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, admin_id: Uuid) -> Result<String, TokenError>;

    /// Checks signature, issuer and time claims.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Lifetime of issued access tokens, in seconds.
    fn access_token_expiry(&self) -> i64;
}
