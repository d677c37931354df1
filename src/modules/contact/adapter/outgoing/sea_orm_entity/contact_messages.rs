use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    #[sea_orm(default_value = false)]
    pub is_read: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactMessage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
