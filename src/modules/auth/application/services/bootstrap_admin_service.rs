use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::auth::application::domain::entities::{AdminSeed, NewAdminAccount};
use crate::auth::application::ports::incoming::use_cases::{
    BootstrapAdminError, BootstrapAdminUseCase, BootstrapOutcome,
};
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, PasswordHasher,
};

pub struct BootstrapAdminService {
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl BootstrapAdminService {
    pub fn new(repository: Arc<dyn AdminRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    fn check_seed(seed: &AdminSeed) -> Result<(), BootstrapAdminError> {
        if seed.username.trim().is_empty() {
            return Err(BootstrapAdminError::InvalidSeed(
                "username is empty".to_string(),
            ));
        }
        if !EmailAddress::is_valid(seed.email.trim()) {
            return Err(BootstrapAdminError::InvalidSeed(
                "email is not a valid address".to_string(),
            ));
        }
        if seed.password.is_empty() {
            return Err(BootstrapAdminError::InvalidSeed(
                "password is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BootstrapAdminUseCase for BootstrapAdminService {
    async fn execute(&self, seed: AdminSeed) -> Result<BootstrapOutcome, BootstrapAdminError> {
        Self::check_seed(&seed)?;
        let username = seed.username.trim().to_string();

        let existing = self
            .repository
            .find_by_username(&username)
            .await
            .map_err(|e| BootstrapAdminError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Ok(BootstrapOutcome::AlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| BootstrapAdminError::HashError(e.to_string()))?;

        let created = self
            .repository
            .create(NewAdminAccount {
                username,
                email: seed.email.trim().to_string(),
                password_hash,
            })
            .await;

        match created {
            Ok(account) => Ok(BootstrapOutcome::Created(account.id)),
            // Another instance won the race.
            Err(AdminRepositoryError::UsernameTaken) => Ok(BootstrapOutcome::AlreadyExists),
            Err(e) => Err(BootstrapAdminError::RepositoryError(e.to_string())),
        }
    }
}
