use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::HeaderTitle;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "header_titles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    pub subtitle: String,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = HeaderTitle;
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

    fn into_record(model: Model) -> Result<Record<HeaderTitle>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            HeaderTitle {
                title: model.title,
                subtitle: model.subtitle,
                is_active: model.is_active,
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &HeaderTitle) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(item.title.trim().to_string()),
            subtitle: Set(item.subtitle.trim().to_string()),
            is_active: Set(item.is_active),
            created_at: created_at_value(created_at),
        }
    }
}
