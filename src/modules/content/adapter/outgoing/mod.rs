pub mod content_repository_postgres;
pub mod content_table;
pub mod sea_orm_entity;

pub use content_repository_postgres::{postgres_content_sources, ContentRepositoryPostgres};
