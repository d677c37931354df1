// src/shared/api/json_config.rs
use crate::modules::contact::application::domain::entities::{
    EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS,
};
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, JsonConfig, QueryConfig};

/// A UTF-8 character is at most 4 bytes, each percent-encoded as `%XX`.
const ENCODED_BYTES_PER_CHAR: usize = 12;
/// Field names, separators and slack for unknown fields.
const FORM_OVERHEAD_BYTES: usize = 1024;

/// Largest url-encoded contact form body that can still be valid.
pub const CONTACT_FORM_LIMIT: usize =
    (NAME_MAX_CHARS + EMAIL_MAX_CHARS + MESSAGE_MAX_CHARS) * ENCODED_BYTES_PER_CHAR
        + FORM_OVERHEAD_BYTES;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Malformed filters such as `?active=maybe` answer with the same envelope.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Url-encoded bodies sized for the contact form. Decoding errors are
/// answered by the handler, which takes the form as a `Result`.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().limit(CONTACT_FORM_LIMIT)
}
