use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Could not build message: {0}")]
    Build(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Sends one plain-text email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;
}
