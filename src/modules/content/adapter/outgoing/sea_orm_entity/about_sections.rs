use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, domain_int, parse_choice, stored_int, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::AboutSection;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// background | philosophy | focus
    pub section_type: String,

    pub display_order: i32,
    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = AboutSection;
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

    fn into_record(model: Model) -> Result<Record<AboutSection>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            AboutSection {
                title: model.title,
                content: model.content,
                section_type: parse_choice(&model.section_type)?,
                display_order: domain_int(model.display_order),
                is_active: model.is_active,
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &AboutSection) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(item.title.trim().to_string()),
            content: Set(item.content.clone()),
            section_type: Set(item.section_type.as_str().to_string()),
            display_order: Set(stored_int(item.display_order)),
            is_active: Set(item.is_active),
            created_at: created_at_value(created_at),
        }
    }
}
