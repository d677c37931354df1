use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::DemoLink).text())
                    .col(ColumnDef::new(Projects::GithubLink).text())
                    .col(
                        ColumnDef::new(Projects::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create project_images table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectImages::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectImages::Image).text().not_null())
                    .col(
                        ColumnDef::new(ProjectImages::AltText)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectImages::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .col(
                        ColumnDef::new(ProjectImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → projects
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_project_id")
                            .from(ProjectImages::Table, ProjectImages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Images of one project, in display order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_images_project_order
                ON project_images (project_id, display_order, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_active_order
                ON projects (display_order, created_at)
                WHERE is_active = TRUE;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    DemoLink,
    GithubLink,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectImages {
    Table,
    Id,
    ProjectId,
    Image,
    AltText,
    DisplayOrder,
    CreatedAt,
}
