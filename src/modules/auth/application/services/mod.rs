pub mod bootstrap_admin_service;
pub mod login_admin_service;

pub use bootstrap_admin_service::BootstrapAdminService;
pub use login_admin_service::LoginAdminService;
