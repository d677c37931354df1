#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_ISSUER: &'static str = "portfolio_site";
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 1800;
    pub const MAX_ACCESS_EXPIRY: i64 = 86_400;
}
