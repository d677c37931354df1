use std::env;
use std::path::PathBuf;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::domain::entities::AdminSeed;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// How contact notifications leave the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpTransport {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain connection to a local catcher, used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub recipient: String,
    pub from: String,
    pub transport: SmtpTransport,
}

/// Notification is optional: incomplete settings switch it off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailSettings {
    Enabled(MailConfig),
    Disabled(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub mail: MailSettings,
    pub admin_seed: Option<AdminSeed>,
    pub jwt: JwtConfig,
    pub chrome_path: Option<PathBuf>,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_ENVIRONMENT: &'static str = "development";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => parse_port("PORT", &raw)?,
            None => Self::DEFAULT_PORT,
        };
        let environment =
            get("RUST_ENV").unwrap_or_else(|| Self::DEFAULT_ENVIRONMENT.to_string());

        let mail = mail_settings(&get, &environment);

        let admin_seed = match (get("ADMIN_USERNAME"), get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(email), Some(password)) => Some(AdminSeed {
                username,
                email,
                password,
            }),
            _ => None,
        };

        let jwt = jwt_config(&get)?;
        let chrome_path = get("CHROME_PATH").map(PathBuf::from);

        Ok(Self {
            database_url,
            host,
            port,
            environment,
            mail,
            admin_seed,
            jwt,
            chrome_path,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn mail_settings<G>(get: &G, environment: &str) -> MailSettings
where
    G: Fn(&str) -> Option<String>,
{
    let (Some(recipient), Some(from)) = (get("CONTACT_EMAIL"), get("EMAIL_FROM")) else {
        return MailSettings::Disabled("CONTACT_EMAIL and EMAIL_FROM are not both set".to_string());
    };

    let transport = if environment == "test" {
        let host = get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
        let port = match get("SMTP_PORT") {
            Some(raw) => match parse_port("SMTP_PORT", &raw) {
                Ok(port) => port,
                Err(e) => return MailSettings::Disabled(e.to_string()),
            },
            None => 1025,
        };
        SmtpTransport::Local { host, port }
    } else {
        match (get("SMTP_SERVER"), get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
            (Some(server), Some(username), Some(password)) => SmtpTransport::Relay {
                server,
                username,
                password,
            },
            _ => {
                return MailSettings::Disabled(
                    "SMTP_SERVER, SMTP_USERNAME and SMTP_PASSWORD are not all set".to_string(),
                )
            }
        }
    };

    MailSettings::Enabled(MailConfig {
        recipient,
        from,
        transport,
    })
}

fn jwt_config<G>(get: &G) -> Result<JwtConfig, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let secret_key = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
    if secret_key.len() < JwtConfig::MIN_SECRET_LEN {
        return Err(ConfigError::Invalid {
            key: "JWT_SECRET",
            reason: format!(
                "must be at least {} characters long for HS256",
                JwtConfig::MIN_SECRET_LEN
            ),
        });
    }

    let access_token_expiry = match get("JWT_ACCESS_EXPIRY") {
        Some(raw) => raw.parse::<i64>().map_err(|e| ConfigError::Invalid {
            key: "JWT_ACCESS_EXPIRY",
            reason: e.to_string(),
        })?,
        None => JwtConfig::DEFAULT_ACCESS_EXPIRY,
    };
    if !(1..=JwtConfig::MAX_ACCESS_EXPIRY).contains(&access_token_expiry) {
        return Err(ConfigError::Invalid {
            key: "JWT_ACCESS_EXPIRY",
            reason: format!("must be between 1 and {} seconds", JwtConfig::MAX_ACCESS_EXPIRY),
        });
    }

    let issuer = get("JWT_ISSUER").unwrap_or_else(|| JwtConfig::DEFAULT_ISSUER.to_string());

    Ok(JwtConfig {
        secret_key,
        issuer,
        access_token_expiry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn base() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://localhost/portfolio"),
            ("JWT_SECRET", SECRET),
        ]
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&base()).unwrap();

        assert_eq!(cfg.bind_address(), "127.0.0.1:8000");
        assert_eq!(cfg.environment, "development");
        assert_eq!(cfg.jwt.access_token_expiry, 1800);
        assert_eq!(cfg.jwt.issuer, "portfolio_site");
        assert!(cfg.admin_seed.is_none());
        assert!(cfg.chrome_path.is_none());
        assert!(matches!(cfg.mail, MailSettings::Disabled(_)));
    }

    #[test]
    fn test_database_url_is_required() {
        assert_eq!(
            config(&[("JWT_SECRET", SECRET)]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_short_jwt_secret_is_rejected() {
        let result = config(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "short")]);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_SECRET", .. })
        ));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let mut vars = base();
        vars.push(("PORT", "eighty"));

        assert!(matches!(
            config(&vars),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_expiry_out_of_range() {
        let mut vars = base();
        vars.push(("JWT_ACCESS_EXPIRY", "0"));

        assert!(matches!(
            config(&vars),
            Err(ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. })
        ));
    }

    #[test]
    fn test_relay_mail_settings() {
        let mut vars = base();
        vars.extend([
            ("CONTACT_EMAIL", "owner@example.com"),
            ("EMAIL_FROM", "site@example.com"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("SMTP_USERNAME", "user"),
            ("SMTP_PASSWORD", "pass"),
        ]);

        let cfg = config(&vars).unwrap();

        assert_eq!(
            cfg.mail,
            MailSettings::Enabled(MailConfig {
                recipient: "owner@example.com".to_string(),
                from: "site@example.com".to_string(),
                transport: SmtpTransport::Relay {
                    server: "smtp.example.com".to_string(),
                    username: "user".to_string(),
                    password: "pass".to_string(),
                },
            })
        );
    }

    #[test]
    fn test_local_mail_in_test_environment() {
        let mut vars = base();
        vars.extend([
            ("RUST_ENV", "test"),
            ("CONTACT_EMAIL", "owner@example.com"),
            ("EMAIL_FROM", "site@example.com"),
        ]);

        let cfg = config(&vars).unwrap();

        match cfg.mail {
            MailSettings::Enabled(mail) => assert_eq!(
                mail.transport,
                SmtpTransport::Local {
                    host: "localhost".to_string(),
                    port: 1025
                }
            ),
            other => panic!("expected local mail, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_relay_disables_mail_only() {
        let mut vars = base();
        vars.extend([
            ("CONTACT_EMAIL", "owner@example.com"),
            ("EMAIL_FROM", "site@example.com"),
            ("SMTP_SERVER", "smtp.example.com"),
        ]);

        let cfg = config(&vars).unwrap();

        assert!(matches!(cfg.mail, MailSettings::Disabled(_)));
    }

    #[test]
    fn test_admin_seed_needs_all_three() {
        let mut vars = base();
        vars.extend([("ADMIN_USERNAME", "admin"), ("ADMIN_EMAIL", "admin@example.com")]);
        assert!(config(&vars).unwrap().admin_seed.is_none());

        vars.push(("ADMIN_PASSWORD", "correct horse battery"));
        let seed = config(&vars).unwrap().admin_seed.unwrap();
        assert_eq!(seed.username, "admin");
    }
}
