pub mod admin_content;

pub use admin_content::configure_admin_content;
