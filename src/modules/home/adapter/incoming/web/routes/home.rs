use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, warn};

use crate::modules::contact::application::domain::entities::ContactForm;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::modules::home::adapter::incoming::web::flash::{Flash, FLASH_COOKIE};
use crate::modules::home::adapter::incoming::web::view::{
    render_error_page, render_home, ContactFormView,
};
use crate::AppState;

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "There was an error sending your message.";
pub const FIX_ERRORS_MESSAGE: &str = "Please correct the errors below.";
pub const UNREADABLE_FORM_MESSAGE: &str =
    "Your message could not be read. Please try again.";

/// Body returned to asynchronous form submissions.
#[derive(Debug, Serialize)]
pub struct ContactReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactReply {
    fn sent() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

fn is_async_request(req: &HttpRequest) -> bool {
    req.headers()
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// Assembles and renders the page; a store failure renders the error page.
async fn render_page(
    data: &AppState,
    status: StatusCode,
    form: &ContactFormView,
    flash: Option<&Flash>,
    cookie: Option<Cookie<'static>>,
) -> HttpResponse {
    let (status, markup) = match data.home.execute().await {
        Ok(page) => (status, render_home(&page, form, flash)),
        Err(e) => {
            error!("Failed to assemble home page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                render_error_page("The page could not be loaded. Please try again later."),
            )
        }
    };

    let mut builder = HttpResponse::build(status);
    if let Some(cookie) = cookie {
        builder.cookie(cookie);
    }
    builder
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

#[get("/")]
pub async fn home_page(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let flash = Flash::from_request(&req);
    let clear = req.cookie(FLASH_COOKIE).map(|_| Flash::removal_cookie());

    render_page(
        &data,
        StatusCode::OK,
        &ContactFormView::default(),
        flash.as_ref(),
        clear,
    )
    .await
}

#[post("/")]
pub async fn submit_contact(
    req: HttpRequest,
    form: Result<web::Form<ContactForm>, actix_web::Error>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let is_async = is_async_request(&req);
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => return unreadable_form(&data, e, is_async).await,
    };

    match data.contact.submit.execute(form.clone()).await {
        Ok(_) if is_async => HttpResponse::Ok().json(ContactReply::sent()),

        Ok(_) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .cookie(Flash::success(SENT_MESSAGE).to_cookie())
            .finish(),

        Err(SubmitContactError::Validation(errors)) if is_async => {
            HttpResponse::Ok().json(ContactReply::failed(errors.to_json()))
        }

        Err(SubmitContactError::Validation(errors)) => {
            render_page(
                &data,
                StatusCode::OK,
                &ContactFormView::rejected(form, errors),
                Some(&Flash::error(FIX_ERRORS_MESSAGE)),
                None,
            )
            .await
        }

        Err(SubmitContactError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            if is_async {
                return HttpResponse::InternalServerError()
                    .json(ContactReply::failed(SEND_FAILED_MESSAGE));
            }
            render_page(
                &data,
                StatusCode::INTERNAL_SERVER_ERROR,
                &ContactFormView::rejected(form, Default::default()),
                Some(&Flash::error(SEND_FAILED_MESSAGE)),
                None,
            )
            .await
        }
    }
}

/// The body could not be decoded (wrong content type, oversized, malformed).
async fn unreadable_form(data: &AppState, err: actix_web::Error, is_async: bool) -> HttpResponse {
    let status = err.as_response_error().status_code();
    warn!("Rejected contact form body ({}): {}", status, err);

    if is_async {
        return HttpResponse::build(status).json(ContactReply::failed(UNREADABLE_FORM_MESSAGE));
    }
    render_page(
        data,
        status,
        &ContactFormView::default(),
        Some(&Flash::error(UNREADABLE_FORM_MESSAGE)),
        None,
    )
    .await
}
