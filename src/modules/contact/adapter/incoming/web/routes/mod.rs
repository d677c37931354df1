pub mod admin_messages;

pub use admin_messages::configure_admin_messages;
