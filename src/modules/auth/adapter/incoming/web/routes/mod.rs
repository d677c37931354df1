pub mod login_admin;

pub use login_admin::{login_admin_handler, LoginRequest};
