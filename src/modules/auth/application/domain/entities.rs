use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The site administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdminAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Credentials supplied through the environment at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
