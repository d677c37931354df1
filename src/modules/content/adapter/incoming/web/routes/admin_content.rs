use actix_web::{web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::domain::content_item::{
    ContentItem, ContentKind, ListFilter, ListingPatch,
};
use crate::modules::content::application::domain::entities::{
    AboutSection, Certificate, ContactInfo, HeaderTitle, HeroSection, Project, ProjectImage,
    Quote, SocialLink, Skill, TimelineItem,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageContentError, ManageContentUseCase,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Kind → use case
// ──────────────────────────────────────────────────────────
//

/// A content kind served under `/api/admin/<kind>`.
pub trait AdminContent: ContentItem {
    fn use_case(cases: &ContentUseCases) -> &Arc<dyn ManageContentUseCase<Self>>;
}

macro_rules! admin_content {
    ($($item:ty => $field:ident),+ $(,)?) => {
        $(
            impl AdminContent for $item {
                fn use_case(cases: &ContentUseCases) -> &Arc<dyn ManageContentUseCase<Self>> {
                    &cases.$field
                }
            }
        )+
    };
}

admin_content! {
    HeaderTitle => header_titles,
    HeroSection => hero_sections,
    Quote => quotes,
    AboutSection => about_sections,
    TimelineItem => timeline_items,
    Skill => skills,
    Certificate => certificates,
    Project => projects,
    ProjectImage => project_images,
    ContactInfo => contact_info,
    SocialLink => social_links,
}

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct BulkActiveRequest {
    pub ids: Vec<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct BulkActiveResponse {
    pub updated: u64,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn list_items<T: AdminContent>(
    _admin: AdminUser,
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let query = query.into_inner();

    if T::KIND == ContentKind::ProjectImage && query.project_id.is_none() {
        let mut errors = FieldErrors::new();
        errors.add("project_id", "required", "This field is required.");
        return ApiResponse::validation_error(&errors);
    }

    let filter = ListFilter {
        is_active: query.active,
        parent_id: query.project_id,
    };

    match T::use_case(&data.content).list(filter).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn get_item<T: AdminContent>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).get(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn create_item<T: AdminContent>(
    _admin: AdminUser,
    body: web::Json<T>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).create(body.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn update_item<T: AdminContent>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<T>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content)
        .update(path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn patch_item<T: AdminContent>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<ListingPatch>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content)
        .patch_listing(path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn delete_item<T: AdminContent>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).delete(path.into_inner()).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(e) => error_response(T::KIND, e),
    }
}

async fn bulk_set_active<T: AdminContent>(
    _admin: AdminUser,
    body: web::Json<BulkActiveRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = body.into_inner();

    match T::use_case(&data.content)
        .bulk_set_active(body.ids, body.is_active)
        .await
    {
        Ok(updated) => ApiResponse::success(BulkActiveResponse { updated }),
        Err(e) => error_response(T::KIND, e),
    }
}

fn error_response(kind: ContentKind, err: ManageContentError) -> HttpResponse {
    match err {
        ManageContentError::Validation(errors) => ApiResponse::validation_error(&errors),

        ManageContentError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", &format!("{} not found", kind.label()))
        }

        ManageContentError::SingletonExists => ApiResponse::conflict(
            "CONTACT_INFO_EXISTS",
            &format!("Only one {} record can exist.", kind.label().to_lowercase()),
        ),

        ManageContentError::Conflict(msg) => {
            error!("Constraint violation on {}: {}", kind, msg);
            ApiResponse::conflict("CONFLICT", "The change conflicts with existing records")
        }

        ManageContentError::RepositoryError(msg) => {
            error!("Repository error on {}: {}", kind, msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Registration
// ──────────────────────────────────────────────────────────
//

fn kind_scope<T: AdminContent>() -> Scope {
    let scope = web::scope(&format!("/api/admin/{}", T::KIND.path()))
        .route("", web::get().to(list_items::<T>))
        .route("", web::post().to(create_item::<T>));

    let scope = if T::KIND.has_active_flag() {
        scope.route("/bulk-active", web::post().to(bulk_set_active::<T>))
    } else {
        scope
    };

    scope
        .route("/{id}", web::get().to(get_item::<T>))
        .route("/{id}", web::put().to(update_item::<T>))
        .route("/{id}", web::patch().to(patch_item::<T>))
        .route("/{id}", web::delete().to(delete_item::<T>))
}

pub fn configure_admin_content(cfg: &mut web::ServiceConfig) {
    cfg.service(kind_scope::<HeaderTitle>())
        .service(kind_scope::<HeroSection>())
        .service(kind_scope::<Quote>())
        .service(kind_scope::<AboutSection>())
        .service(kind_scope::<TimelineItem>())
        .service(kind_scope::<Skill>())
        .service(kind_scope::<Certificate>())
        .service(kind_scope::<Project>())
        .service(kind_scope::<ProjectImage>())
        .service(kind_scope::<ContactInfo>())
        .service(kind_scope::<SocialLink>());
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::application::ports::outgoing::{
        ContentRepositoryError, ContentSources,
    };
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::in_memory_content::{in_memory_sources, InMemoryContentRepository};

    async fn send(
        sources: ContentSources,
        req: test::TestRequest,
        authorized: bool,
    ) -> (StatusCode, Value) {
        let tokens = token_provider();
        let state = TestAppStateBuilder::default()
            .with_content(ContentUseCases::from_sources(&sources))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(Arc::clone(&tokens)))
                .app_data(custom_json_config())
                .configure(configure_admin_content),
        )
        .await;

        let req = if authorized {
            req.insert_header(("Authorization", bearer(&tokens, Uuid::new_v4())))
        } else {
            req
        };
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, json)
    }

    fn hero_json(title: &str, active: bool) -> Value {
        json!({
            "title": title,
            "subtitle": "Full-stack developer",
            "is_active": active
        })
    }

    #[actix_web::test]
    async fn test_requires_admin_token() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::get().uri("/api/admin/quotes"),
            false,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_create_then_list_hero_sections() {
        let sources = in_memory_sources();

        let (status, created) = send(
            sources.clone(),
            test::TestRequest::post()
                .uri("/api/admin/hero-sections")
                .set_json(hero_json("First", true)),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["data"]["title"], "First");
        assert_eq!(created["data"]["projects_count"], 42);

        send(
            sources.clone(),
            test::TestRequest::post()
                .uri("/api/admin/hero-sections")
                .set_json(hero_json("Second", true)),
            true,
        )
        .await;

        let (status, listed) = send(
            sources,
            test::TestRequest::get().uri("/api/admin/hero-sections?active=true"),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let active = listed["data"].as_array().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["title"], "Second");
    }

    #[actix_web::test]
    async fn test_invalid_body_is_validation_error() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::post()
                .uri("/api/admin/skills")
                .set_json(json!({"name": "Rust", "proficiency": 150})),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["fields"]["proficiency"].is_array());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::post()
                .uri("/api/admin/quotes")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json"),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_missing_record_is_not_found() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::get().uri(&format!("/api/admin/quotes/{}", Uuid::new_v4())),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_second_contact_info_conflicts() {
        let sources = in_memory_sources();
        let info = json!({"email": "me@example.com", "address": "Jakarta"});

        let (status, _) = send(
            sources.clone(),
            test::TestRequest::post()
                .uri("/api/admin/contact-info")
                .set_json(&info),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            sources,
            test::TestRequest::post()
                .uri("/api/admin/contact-info")
                .set_json(&info),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONTACT_INFO_EXISTS");
    }

    #[actix_web::test]
    async fn test_project_images_require_project_id() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::get().uri("/api/admin/project-images"),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["fields"]["project_id"].is_array());
    }

    #[actix_web::test]
    async fn test_patch_and_delete_quote() {
        let sources = in_memory_sources();
        let (_, created) = send(
            sources.clone(),
            test::TestRequest::post()
                .uri("/api/admin/quotes")
                .set_json(json!({"text": "Ship it."})),
            true,
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let (status, patched) = send(
            sources.clone(),
            test::TestRequest::patch()
                .uri(&format!("/api/admin/quotes/{id}"))
                .set_json(json!({"display_order": 3, "is_active": false})),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["data"]["display_order"], 3);
        assert_eq!(patched["data"]["is_active"], false);

        let (status, _) = send(
            sources.clone(),
            test::TestRequest::delete().uri(&format!("/api/admin/quotes/{id}")),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            sources,
            test::TestRequest::get().uri(&format!("/api/admin/quotes/{id}")),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bulk_active_reports_count() {
        let sources = in_memory_sources();
        let mut ids = Vec::new();
        for text in ["a", "b"] {
            let (_, created) = send(
                sources.clone(),
                test::TestRequest::post()
                    .uri("/api/admin/quotes")
                    .set_json(json!({"text": text})),
                true,
            )
            .await;
            ids.push(created["data"]["id"].clone());
        }

        let (status, body) = send(
            sources,
            test::TestRequest::post()
                .uri("/api/admin/quotes/bulk-active")
                .set_json(json!({"ids": ids, "is_active": false})),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["updated"], 2);
    }

    #[actix_web::test]
    async fn test_bulk_activating_two_heroes_is_rejected() {
        let (status, body) = send(
            in_memory_sources(),
            test::TestRequest::post()
                .uri("/api/admin/hero-sections/bulk-active")
                .set_json(json!({"ids": [Uuid::new_v4(), Uuid::new_v4()], "is_active": true})),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_store_failure_is_internal_error() {
        let mut sources = in_memory_sources();
        sources.skills = Arc::new(
            InMemoryContentRepository::new()
                .fail_with(ContentRepositoryError::DatabaseError("down".to_string())),
        );

        let (status, body) = send(
            sources,
            test::TestRequest::get().uri("/api/admin/skills"),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
