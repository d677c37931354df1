pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;

use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::ports::incoming::use_cases::{
    BootstrapAdminUseCase, BootstrapOutcome, LoginAdminUseCase,
};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::{BootstrapAdminService, LoginAdminService};
use crate::config::AppConfig;
use crate::email::adapter::outgoing::contact_notifier;
use crate::modules::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{
    ManageContactMessagesService, SubmitContactMessageService,
};
use crate::modules::content::adapter::outgoing::postgres_content_sources;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::home::application::ports::incoming::use_cases::AssembleHomePageUseCase;
use crate::modules::home::application::service::AssembleHomePageService;
use crate::modules::resume::adapter::outgoing::ChromeResumeRenderer;
use crate::modules::resume::application::ports::incoming::use_cases::ExportResumeUseCase;
use crate::modules::resume::application::service::ExportResumeService;
use crate::shared::api::{custom_form_config, custom_json_config, custom_query_config};

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub contact: ContactUseCases,
    pub home: Arc<dyn AssembleHomePageUseCase>,
    pub resume: Arc<dyn ExportResumeUseCase>,
    pub login_admin: Arc<dyn LoginAdminUseCase>,
}

#[cfg(not(tarpaulin_include))]
fn load_env_file() {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect(database_url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;
    Ok(Arc::new(db))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_file();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!("Environment: {}", config.environment);

    let db_arc = connect(&config.database_url).await?;

    let hasher = Arc::new(Argon2Hasher::default());
    let admin_repo = Arc::new(AdminRepositoryPostgres::new(Arc::clone(&db_arc)));

    match config.admin_seed.clone() {
        Some(seed) => {
            let bootstrap = BootstrapAdminService::new(admin_repo.clone(), hasher.clone());
            match bootstrap.execute(seed).await {
                Ok(BootstrapOutcome::Created(id)) => info!("Admin account created ({id})"),
                Ok(BootstrapOutcome::AlreadyExists) => info!("Admin account already present"),
                Err(e) => warn!("Admin bootstrap skipped: {e}"),
            }
        }
        None => info!("ADMIN_USERNAME/ADMIN_EMAIL/ADMIN_PASSWORD not set, no admin bootstrap"),
    }

    let notifier = contact_notifier(&config.mail);
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));

    let sources = postgres_content_sources(Arc::clone(&db_arc));
    let content = ContentUseCases::from_sources(&sources);

    let messages_repo = Arc::new(ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc)));
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactMessageService::new(
            messages_repo.clone(),
            notifier,
        )),
        messages: Arc::new(ManageContactMessagesService::new(messages_repo)),
    };

    let renderer = Arc::new(ChromeResumeRenderer::new(config.chrome_path.clone()));

    let state = AppState {
        content,
        contact,
        home: Arc::new(AssembleHomePageService::new(sources.clone())),
        resume: Arc::new(ExportResumeService::new(sources, renderer)),
        login_admin: Arc::new(LoginAdminService::new(
            admin_repo,
            hasher,
            jwt_service.clone(),
        )),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let db_for_server = Arc::clone(&db_arc);
    let bind_address = config.bind_address();
    info!("Listening on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::modules::home::adapter::incoming::web::routes::home_page);
    cfg.service(crate::modules::home::adapter::incoming::web::routes::submit_contact);
    cfg.service(crate::modules::resume::adapter::incoming::web::routes::download_resume);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Admin
    crate::modules::content::adapter::incoming::web::routes::configure_admin_content(cfg);
    crate::modules::contact::adapter::incoming::web::routes::configure_admin_messages(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
