pub mod manage_contact_messages;
pub mod submit_contact_message;

pub use manage_contact_messages::{ManageContactMessagesUseCase, ManageMessagesError};
pub use submit_contact_message::{SubmitContactError, SubmitContactMessageUseCase};
