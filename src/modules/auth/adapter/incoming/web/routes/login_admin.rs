use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::auth::application::ports::incoming::use_cases::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token issued"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.login_admin.execute(&req.username, &req.password).await {
        Ok(result) => ApiResponse::success(result),

        Err(LoginAdminError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
