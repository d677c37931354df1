use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn active_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .boolean()
        .not_null()
        .default(true)
        .to_owned()
}

fn display_order_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .default(0)
        .check(Expr::cust("display_order >= 0"))
        .to_owned()
}

fn created_at_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Single-active kinds
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(HeaderTitles::Table)
                    .if_not_exists()
                    .col(id_col(HeaderTitles::Id))
                    .col(ColumnDef::new(HeaderTitles::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(HeaderTitles::Subtitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(active_col(HeaderTitles::IsActive))
                    .col(created_at_col(HeaderTitles::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeroSections::Table)
                    .if_not_exists()
                    .col(id_col(HeroSections::Id))
                    .col(ColumnDef::new(HeroSections::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(HeroSections::Subtitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HeroSections::Image).text())
                    .col(
                        ColumnDef::new(HeroSections::ProjectsCount)
                            .integer()
                            .not_null()
                            .default(42),
                    )
                    .col(
                        ColumnDef::new(HeroSections::ClientsCount)
                            .integer()
                            .not_null()
                            .default(28),
                    )
                    .col(
                        ColumnDef::new(HeroSections::ExperienceCount)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(active_col(HeroSections::IsActive))
                    .col(created_at_col(HeroSections::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // At most one active row per single-active kind.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_header_titles_single_active
                ON header_titles ((is_active)) WHERE is_active;
                CREATE UNIQUE INDEX IF NOT EXISTS idx_hero_sections_single_active
                ON hero_sections ((is_active)) WHERE is_active;
                "#,
            )
            .await?;

        // =====================================================
        // Ordered kinds
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Quotes::Table)
                    .if_not_exists()
                    .col(id_col(Quotes::Id))
                    .col(ColumnDef::new(Quotes::Text).text().not_null())
                    .col(display_order_col(Quotes::DisplayOrder))
                    .col(active_col(Quotes::IsActive))
                    .col(created_at_col(Quotes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutSections::Table)
                    .if_not_exists()
                    .col(id_col(AboutSections::Id))
                    .col(ColumnDef::new(AboutSections::Title).string_len(200).not_null())
                    .col(ColumnDef::new(AboutSections::Content).text().not_null())
                    .col(
                        ColumnDef::new(AboutSections::SectionType)
                            .string_len(20)
                            .not_null()
                            .check(Expr::cust(
                                "section_type IN ('background', 'philosophy', 'focus')",
                            )),
                    )
                    .col(display_order_col(AboutSections::DisplayOrder))
                    .col(active_col(AboutSections::IsActive))
                    .col(created_at_col(AboutSections::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimelineItems::Table)
                    .if_not_exists()
                    .col(id_col(TimelineItems::Id))
                    .col(ColumnDef::new(TimelineItems::Title).string_len(200).not_null())
                    .col(ColumnDef::new(TimelineItems::Period).string_len(100).not_null())
                    .col(ColumnDef::new(TimelineItems::Description).text().not_null())
                    .col(
                        ColumnDef::new(TimelineItems::Category)
                            .string_len(20)
                            .not_null()
                            .check(Expr::cust("category IN ('education', 'career', 'future')")),
                    )
                    .col(display_order_col(TimelineItems::DisplayOrder))
                    .col(active_col(TimelineItems::IsActive))
                    .col(created_at_col(TimelineItems::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(id_col(Skills::Id))
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .small_integer()
                            .not_null()
                            .default(80)
                            .check(Expr::cust("proficiency BETWEEN 0 AND 100")),
                    )
                    .col(
                        ColumnDef::new(Skills::Icon)
                            .string_len(50)
                            .not_null()
                            .default("fas fa-code"),
                    )
                    .col(display_order_col(Skills::DisplayOrder))
                    .col(active_col(Skills::IsActive))
                    .col(created_at_col(Skills::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(id_col(Certificates::Id))
                    .col(ColumnDef::new(Certificates::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Certificates::Issuer).string_len(200).not_null())
                    .col(ColumnDef::new(Certificates::Description).text().not_null())
                    .col(ColumnDef::new(Certificates::Image).text().not_null())
                    .col(ColumnDef::new(Certificates::IssueDate).date())
                    .col(display_order_col(Certificates::DisplayOrder))
                    .col(active_col(Certificates::IsActive))
                    .col(created_at_col(Certificates::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Contact details
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContactInfo::Table)
                    .if_not_exists()
                    .col(id_col(ContactInfo::Id))
                    .col(ColumnDef::new(ContactInfo::Title).string_len(100).not_null())
                    .col(ColumnDef::new(ContactInfo::Description).text().not_null())
                    .col(ColumnDef::new(ContactInfo::Email).string_len(254).not_null())
                    .col(ColumnDef::new(ContactInfo::Address).string_len(255).not_null())
                    .col(created_at_col(ContactInfo::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Singleton: every row indexes the same constant.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_contact_info_singleton
                ON contact_info ((true));
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(id_col(SocialLinks::Id))
                    .col(ColumnDef::new(SocialLinks::Platform).string_len(50).not_null())
                    .col(ColumnDef::new(SocialLinks::Url).text().not_null())
                    .col(ColumnDef::new(SocialLinks::Icon).string_len(100).not_null())
                    .col(active_col(SocialLinks::IsActive))
                    .col(created_at_col(SocialLinks::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimelineItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AboutSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HeroSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HeaderTitles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HeaderTitles {
    Table,
    Id,
    Title,
    Subtitle,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HeroSections {
    Table,
    Id,
    Title,
    Subtitle,
    Image,
    ProjectsCount,
    ClientsCount,
    ExperienceCount,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Quotes {
    Table,
    Id,
    Text,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AboutSections {
    Table,
    Id,
    Title,
    Content,
    SectionType,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TimelineItems {
    Table,
    Id,
    Title,
    Period,
    Description,
    Category,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Proficiency,
    Icon,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    Title,
    Issuer,
    Description,
    Image,
    IssueDate,
    DisplayOrder,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContactInfo {
    Table,
    Id,
    Title,
    Description,
    Email,
    Address,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    Platform,
    Url,
    Icon,
    IsActive,
    CreatedAt,
}
