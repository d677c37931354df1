use crate::api::schemas::{
    ErrorDetail, ErrorResponse, MarkMessagesBody, SuccessResponse, UpdatedCount,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::LoginRequest;
use crate::auth::application::ports::incoming::use_cases::LoginResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Admin API, resume export and health checks of the portfolio site"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,

        // Contact messages
        crate::modules::contact::adapter::incoming::web::routes::admin_messages::list_messages,
        crate::modules::contact::adapter::incoming::web::routes::admin_messages::get_message,
        crate::modules::contact::adapter::incoming::web::routes::admin_messages::delete_message,
        crate::modules::contact::adapter::incoming::web::routes::admin_messages::mark_read,
        crate::modules::contact::adapter::incoming::web::routes::admin_messages::mark_unread,

        // Resume
        crate::modules::resume::adapter::incoming::web::routes::resume::download_resume,
    ),
    components(
        schemas(
            SuccessResponse<LoginResult>,
            SuccessResponse<UpdatedCount>,
            ErrorResponse,
            ErrorDetail,
            LoginRequest,
            LoginResult,
            MarkMessagesBody,
            UpdatedCount
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "auth", description = "Administrator login"),
        (name = "contact-messages", description = "Visitor messages"),
        (name = "resume", description = "PDF resume export"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
