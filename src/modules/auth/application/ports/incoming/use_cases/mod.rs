pub mod bootstrap_admin;
pub mod login_admin;

pub use bootstrap_admin::{BootstrapAdminError, BootstrapAdminUseCase, BootstrapOutcome};
pub use login_admin::{LoginAdminError, LoginAdminUseCase, LoginResult};
