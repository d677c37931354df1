use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, domain_int, stored_int, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::ProjectImage;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub project_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    pub alt_text: String,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = ProjectImage;
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

    fn parent_column() -> Option<Column> {
        Some(Column::ProjectId)
    }

    fn into_record(model: Model) -> Result<Record<ProjectImage>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            ProjectImage {
                project_id: model.project_id,
                image: model.image,
                alt_text: model.alt_text,
                display_order: domain_int(model.display_order),
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &ProjectImage) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            project_id: Set(item.project_id),
            image: Set(item.image.trim().to_string()),
            alt_text: Set(item.alt_text.trim().to_string()),
            display_order: Set(stored_int(item.display_order)),
            created_at: created_at_value(created_at),
        }
    }
}
