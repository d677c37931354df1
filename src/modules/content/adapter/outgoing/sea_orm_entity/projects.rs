use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::DeleteStatement;
use sea_orm::{QueryTrait, Set};

use super::project_images;
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, domain_int, non_blank, stored_int, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::Project;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    pub display_order: i32,
    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_images::Entity")]
    ProjectImages,
}

impl Related<project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = Project;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn display_order_column() -> Option<Column> {
        Some(Column::DisplayOrder)
    }

    fn active_column() -> Option<Column> {
        Some(Column::IsActive)
    }

    fn into_record(model: Model) -> Result<Record<Project>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            Project {
                title: model.title,
                description: model.description,
                demo_link: model.demo_link,
                github_link: model.github_link,
                display_order: domain_int(model.display_order),
                is_active: model.is_active,
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &Project) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(item.title.trim().to_string()),
            description: Set(item.description.clone()),
            demo_link: Set(non_blank(&item.demo_link)),
            github_link: Set(non_blank(&item.github_link)),
            display_order: Set(stored_int(item.display_order)),
            is_active: Set(item.is_active),
            created_at: created_at_value(created_at),
        }
    }

    // Images go with their project.
    fn owned_rows(id: Uuid) -> Vec<DeleteStatement> {
        vec![project_images::Entity::delete_many()
            .filter(project_images::Column::ProjectId.eq(id))
            .into_query()]
    }
}
