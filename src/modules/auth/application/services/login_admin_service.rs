use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminUseCase, LoginResult,
};
use crate::auth::application::ports::outgoing::{AdminRepository, PasswordHasher, TokenProvider};

pub struct LoginAdminService {
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        repository: Arc<dyn AdminRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, LoginAdminError> {
        let account = self
            .repository
            .find_by_username(username.trim())
            .await
            .map_err(|e| LoginAdminError::RepositoryError(e.to_string()))?
            .ok_or(LoginAdminError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(password, &account.password_hash)
            .await
            .map_err(|e| LoginAdminError::HashError(e.to_string()))?;
        if !matches {
            tracing::warn!(username = %account.username, "Rejected admin login");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.id)
            .map_err(|e| LoginAdminError::TokenError(e.to_string()))?;

        Ok(LoginResult {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_expiry(),
        })
    }
}
