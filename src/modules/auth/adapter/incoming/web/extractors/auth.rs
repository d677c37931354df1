use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// The authenticated administrator behind an admin request.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub admin_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
            tracing::error!("Token provider is not registered");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match tokens.verify_token(&token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => {
                ready(Ok(AdminUser { admin_id: claims.sub }))
            }
            Ok(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
