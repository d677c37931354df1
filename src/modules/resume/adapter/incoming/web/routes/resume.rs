use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/cv/",
    tag = "resume",
    responses(
        (status = 200, description = "Resume PDF", content_type = "application/pdf"),
        (status = 500, description = "Rendering failed")
    )
)]
#[get("/cv/")]
pub async fn download_resume(data: web::Data<AppState>) -> HttpResponse {
    match data.resume.execute().await {
        Ok(doc) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(doc.filename.to_string())],
            })
            .body(doc.bytes),

        Err(e) => {
            error!("Resume export failed: {}", e);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "RENDER_FAILED",
                "The resume could not be generated",
            )
        }
    }
}
