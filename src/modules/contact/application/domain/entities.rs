use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::FieldErrors;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// A stored visitor message. Only `is_read` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw form input, as the visitor typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A form that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("name", &self.name, NAME_MAX_CHARS);
        errors.email("email", &self.email, EMAIL_MAX_CHARS);
        errors.required_text("message", &self.message, MESSAGE_MAX_CHARS);
        errors.into_result()?;

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MessageFilter {
    pub is_read: Option<bool>,
}
