use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::email::application::ports::outgoing::{
    ContactNotifier, EmailSender, NotificationError,
};

/// Mails each new contact message to the site owner.
#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }

    pub fn subject(message: &ContactMessage) -> String {
        format!("New message from {}", message.name)
    }

    pub fn body(message: &ContactMessage) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            message.name, message.email, message.message
        )
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotificationError> {
        self.sender
            .send_email(&self.recipient, &Self::subject(message), &Self::body(message))
            .await
            .map_err(|e| NotificationError::EmailSendingFailed(e.to_string()))
    }
}

/// Used when mail settings are absent: nothing is sent and nothing fails.
#[derive(Debug, Clone, Default)]
pub struct DisabledContactNotifier;

#[async_trait]
impl ContactNotifier for DisabledContactNotifier {
    async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotificationError> {
        tracing::debug!("Mail not configured, no notification for message {}", message.id);
        Ok(())
    }
}
