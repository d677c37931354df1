use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admin_users::{self, ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::{AdminAccount, NewAdminAccount};
use crate::auth::application::ports::outgoing::{AdminRepository, AdminRepositoryError};

#[derive(Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AdminRepositoryError> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_account))
    }

    async fn create(&self, account: NewAdminAccount) -> Result<AdminAccount, AdminRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_account(saved))
    }
}

fn to_account(model: admin_users::Model) -> AdminAccount {
    AdminAccount {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AdminRepositoryError::UsernameTaken,
        _ => AdminRepositoryError::DatabaseError(e.to_string()),
    }
}
