pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_admin_users_table;
mod m20260301_000002_create_site_content_tables;
mod m20260301_000003_create_projects_tables;
mod m20260301_000004_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_admin_users_table::Migration),
            Box::new(m20260301_000002_create_site_content_tables::Migration),
            Box::new(m20260301_000003_create_projects_tables::Migration),
            Box::new(m20260301_000004_create_contact_messages_table::Migration),
        ]
    }
}
