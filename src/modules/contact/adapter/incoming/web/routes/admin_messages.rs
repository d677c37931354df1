use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MarkMessagesBody, SuccessResponse, UpdatedCount};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::MessageFilter;
use crate::modules::contact::application::ports::incoming::use_cases::ManageMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct MarkResponse {
    pub updated: u64,
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    tag = "contact-messages",
    params(("is_read" = Option<bool>, Query, description = "Filter by read state")),
    responses(
        (status = 200, description = "Messages, newest first"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn list_messages(
    _admin: AdminUser,
    query: web::Query<MessageFilter>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.messages.list(query.into_inner()).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages/{id}",
    tag = "contact-messages",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message"),
        (status = 404, description = "No such message", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn get_message(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.messages.get(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/contact-messages/{id}",
    tag = "contact-messages",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such message", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn delete_message(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.messages.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/contact-messages/mark-read",
    tag = "contact-messages",
    request_body = MarkMessagesBody,
    responses(
        (status = 200, description = "Rows changed", body = SuccessResponse<UpdatedCount>),
        (status = 400, description = "No ids given", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn mark_read(
    _admin: AdminUser,
    body: web::Json<MarkRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    mark(data, body.into_inner(), true).await
}

#[utoipa::path(
    post,
    path = "/api/admin/contact-messages/mark-unread",
    tag = "contact-messages",
    request_body = MarkMessagesBody,
    responses(
        (status = 200, description = "Rows changed", body = SuccessResponse<UpdatedCount>),
        (status = 400, description = "No ids given", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn mark_unread(
    _admin: AdminUser,
    body: web::Json<MarkRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    mark(data, body.into_inner(), false).await
}

async fn mark(data: web::Data<AppState>, body: MarkRequest, read: bool) -> HttpResponse {
    match data.contact.messages.mark(body.ids, read).await {
        Ok(updated) => ApiResponse::success(MarkResponse { updated }),
        Err(e) => error_response(e),
    }
}

fn error_response(err: ManageMessagesError) -> HttpResponse {
    match err {
        ManageMessagesError::Validation(errors) => ApiResponse::validation_error(&errors),
        ManageMessagesError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", "Contact message not found")
        }
        ManageMessagesError::RepositoryError(msg) => {
            error!("Repository error on contact messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub fn configure_admin_messages(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/contact-messages")
            .route("", web::get().to(list_messages))
            .route("/mark-read", web::post().to(mark_read))
            .route("/mark-unread", web::post().to(mark_unread))
            .route("/{id}", web::get().to(get_message))
            .route("/{id}", web::delete().to(delete_message)),
    );
}
