use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, to_utc, ContentTable,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::ContactInfo;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub email: String,

    pub address: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ContentTable for Entity {
    type Item = ContactInfo;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn into_record(model: Model) -> Result<Record<ContactInfo>, ContentRepositoryError> {
        Ok(Record::new(
            model.id,
            to_utc(model.created_at),
            ContactInfo {
                title: model.title,
                description: model.description,
                email: model.email,
                address: model.address,
            },
        ))
    }

    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &ContactInfo) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(item.title.trim().to_string()),
            description: Set(item.description.clone()),
            email: Set(item.email.trim().to_string()),
            address: Set(item.address.trim().to_string()),
            created_at: created_at_value(created_at),
        }
    }
}
