use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, domain_int, non_blank, stored_int, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::HeroSection;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    pub subtitle: String,

    /// Path or URL of the portrait.
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    pub projects_count: i32,
    pub clients_count: i32,
    pub experience_count: i32,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = HeroSection;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_column() -> Option<Column> {
        Some(Column::IsActive)
    }

    fn into_record(model: Model) -> Result<Record<HeroSection>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            HeroSection {
                title: model.title,
                subtitle: model.subtitle,
                image: model.image,
                projects_count: domain_int(model.projects_count),
                clients_count: domain_int(model.clients_count),
                experience_count: domain_int(model.experience_count),
                is_active: model.is_active,
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &HeroSection) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(item.title.trim().to_string()),
            subtitle: Set(item.subtitle.trim().to_string()),
            image: Set(non_blank(&item.image)),
            projects_count: Set(stored_int(item.projects_count)),
            clients_count: Set(stored_int(item.clients_count)),
            experience_count: Set(stored_int(item.experience_count)),
            is_active: Set(item.is_active),
            created_at: created_at_value(created_at),
        }
    }
}
