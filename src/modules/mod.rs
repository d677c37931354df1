pub mod auth;
pub mod contact;
pub mod content;
pub mod email;
pub mod home;
pub mod resume;
