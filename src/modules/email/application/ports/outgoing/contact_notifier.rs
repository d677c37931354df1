use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Tells the site owner about a new contact message.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotificationError>;
}
