pub mod contact_notifier;
pub mod email_sender;

pub use contact_notifier::{ContactNotifier, NotificationError};
pub use email_sender::{EmailError, EmailSender};
