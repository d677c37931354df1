use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::contact_messages::{self, ActiveModel, Column, Entity};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactSubmission, MessageFilter,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            ContactMessageRepositoryError::NotFound
        }
        other => ContactMessageRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn create(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(submission.name),
            email: Set(submission.email),
            message: Set(submission.message),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list(
        &self,
        filter: MessageFilter,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let mut query = Entity::find();
        if let Some(read) = filter.is_read {
            query = query.filter(Column::IsRead.eq(read));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(ContactMessage::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<ContactMessage, ContactMessageRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(ContactMessage::from)
            .ok_or(ContactMessageRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactMessageRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_read(
        &self,
        ids: &[Uuid],
        read: bool,
    ) -> Result<u64, ContactMessageRepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(read))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.rows_affected, read, "Contact messages marked");
        Ok(result.rows_affected)
    }
}
