pub mod jwt_config;
pub mod jwt_service;

pub use jwt_config::JwtConfig;
pub use jwt_service::JwtTokenService;
