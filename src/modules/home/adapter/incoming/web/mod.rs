pub mod flash;
pub mod routes;
pub mod view;
