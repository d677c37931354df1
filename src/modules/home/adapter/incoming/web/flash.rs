use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A one-shot notice carried across a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// `<level>:<message>`, base64url so the value is a legal cookie value.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{}:{}", self.level.as_str(), self.message))
    }

    pub fn decode(value: &str) -> Option<Self> {
        let raw = URL_SAFE_NO_PAD.decode(value).ok()?;
        let raw = String::from_utf8(raw).ok()?;
        let (level, message) = raw.split_once(':')?;
        let level = match level {
            "success" => FlashLevel::Success,
            "error" => FlashLevel::Error,
            _ => return None,
        };
        Some(Self {
            level,
            message: message.to_string(),
        })
    }

    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, self.encode())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// The flash sent with `req`, if any. Undecodable values are ignored.
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.cookie(FLASH_COOKIE)
            .and_then(|cookie| Self::decode(cookie.value()))
    }

    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }
}
