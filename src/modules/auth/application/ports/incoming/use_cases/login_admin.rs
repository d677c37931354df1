use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Hashing error: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str)
        -> Result<LoginResult, LoginAdminError>;
}
