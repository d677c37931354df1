pub mod notifier_setup;
pub mod smtp_sender;

pub use notifier_setup::contact_notifier;
pub use smtp_sender::SmtpEmailSender;
