use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Slow password hashing; implementations run off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password, `Err` on an unreadable hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
