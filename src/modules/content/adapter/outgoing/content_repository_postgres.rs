use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, DbErr, EntityName, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, SqlErr,
    TransactionTrait,
};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use super::content_table::ContentTable;
use super::sea_orm_entity::{
    about_sections, certificates, contact_info, header_titles, hero_sections, project_images,
    projects, quotes, skills, social_links, timeline_items,
};
use crate::modules::content::application::domain::content_item::{
    ContentItem, ListFilter, Record,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, ContentSources,
};

// ============================================================================
// Repository Implementation
// ============================================================================

/// One repository type for every content table.
pub struct ContentRepositoryPostgres<E> {
    db: Arc<DatabaseConnection>,
    _table: PhantomData<fn() -> E>,
}

impl<E> ContentRepositoryPostgres<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }
}

impl<E> Clone for ContentRepositoryPostgres<E> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

/// Wires a Postgres repository for every content kind.
pub fn postgres_content_sources(db: Arc<DatabaseConnection>) -> ContentSources {
    ContentSources {
        header_titles: Arc::new(ContentRepositoryPostgres::<header_titles::Entity>::new(
            Arc::clone(&db),
        )),
        hero_sections: Arc::new(ContentRepositoryPostgres::<hero_sections::Entity>::new(
            Arc::clone(&db),
        )),
        quotes: Arc::new(ContentRepositoryPostgres::<quotes::Entity>::new(Arc::clone(
            &db,
        ))),
        about_sections: Arc::new(ContentRepositoryPostgres::<about_sections::Entity>::new(
            Arc::clone(&db),
        )),
        timeline_items: Arc::new(ContentRepositoryPostgres::<timeline_items::Entity>::new(
            Arc::clone(&db),
        )),
        skills: Arc::new(ContentRepositoryPostgres::<skills::Entity>::new(Arc::clone(
            &db,
        ))),
        certificates: Arc::new(ContentRepositoryPostgres::<certificates::Entity>::new(
            Arc::clone(&db),
        )),
        projects: Arc::new(ContentRepositoryPostgres::<projects::Entity>::new(
            Arc::clone(&db),
        )),
        project_images: Arc::new(ContentRepositoryPostgres::<project_images::Entity>::new(
            Arc::clone(&db),
        )),
        contact_info: Arc::new(ContentRepositoryPostgres::<contact_info::Entity>::new(
            Arc::clone(&db),
        )),
        social_links: Arc::new(ContentRepositoryPostgres::<social_links::Entity>::new(db)),
    }
}

#[async_trait]
impl<E> ContentRepository<E::Item> for ContentRepositoryPostgres<E>
where
    E: ContentTable,
    E::Model: IntoActiveModel<E::Active> + Sync,
{
    async fn list(
        &self,
        filter: ListFilter,
    ) -> Result<Vec<Record<E::Item>>, ContentRepositoryError> {
        let mut query = E::find();

        if let (Some(active), Some(col)) = (filter.is_active, E::active_column()) {
            query = query.filter(col.eq(active));
        }
        if let (Some(parent), Some(col)) = (filter.parent_id, E::parent_column()) {
            query = query.filter(col.eq(parent));
        }
        if let Some(col) = E::display_order_column() {
            query = query.order_by_asc(col);
        }

        let models = query
            .order_by_asc(E::created_at_column())
            .order_by_asc(E::id_column())
            .all(&*self.db)
            .await
            .map_err(map_db_err::<E::Item>)?;

        models.into_iter().map(E::into_record).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Record<E::Item>, ContentRepositoryError> {
        let model = E::find()
            .filter(E::id_column().eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err::<E::Item>)?
            .ok_or(ContentRepositoryError::NotFound)?;

        E::into_record(model)
    }

    async fn create(&self, item: E::Item) -> Result<Record<E::Item>, ContentRepositoryError> {
        let id = Uuid::new_v4();
        let txn = self.db.begin().await.map_err(map_db_err::<E::Item>)?;

        if <E::Item as ContentItem>::SINGLETON {
            lock_kind::<E>(&txn).await?;
            let existing = E::find()
                .one(&txn)
                .await
                .map_err(map_db_err::<E::Item>)?;
            if existing.is_some() {
                return Err(ContentRepositoryError::SingletonExists);
            }
        }

        if <E::Item as ContentItem>::SINGLE_ACTIVE && item.is_active() {
            lock_kind::<E>(&txn).await?;
            deactivate_others::<E>(&txn, id).await?;
        }

        let model = E::to_active(id, Some(Utc::now()), &item)
            .insert(&txn)
            .await
            .map_err(map_db_err::<E::Item>)?;

        txn.commit().await.map_err(map_db_err::<E::Item>)?;

        E::into_record(model)
    }

    async fn update(
        &self,
        id: Uuid,
        item: E::Item,
    ) -> Result<Record<E::Item>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err::<E::Item>)?;

        if <E::Item as ContentItem>::SINGLE_ACTIVE && item.is_active() {
            lock_kind::<E>(&txn).await?;
            deactivate_others::<E>(&txn, id).await?;
        }

        let model = E::to_active(id, None, &item)
            .update(&txn)
            .await
            .map_err(map_db_err::<E::Item>)?;

        txn.commit().await.map_err(map_db_err::<E::Item>)?;

        E::into_record(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err::<E::Item>)?;
        let backend = txn.get_database_backend();

        for stmt in E::owned_rows(id) {
            txn.execute(backend.build(&stmt))
                .await
                .map_err(map_db_err::<E::Item>)?;
        }

        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err::<E::Item>)?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err::<E::Item>)?;

        Ok(())
    }

    async fn set_active(&self, ids: &[Uuid], active: bool) -> Result<u64, ContentRepositoryError> {
        let col = E::active_column().ok_or_else(|| {
            ContentRepositoryError::Conflict(format!(
                "{} has no active flag",
                <E::Item as ContentItem>::KIND.label()
            ))
        })?;

        if ids.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await.map_err(map_db_err::<E::Item>)?;

        if <E::Item as ContentItem>::SINGLE_ACTIVE && active {
            if let [keep] = ids {
                lock_kind::<E>(&txn).await?;
                deactivate_others::<E>(&txn, *keep).await?;
            } else {
                return Err(ContentRepositoryError::Conflict(format!(
                    "Only one {} can be active at a time.",
                    <E::Item as ContentItem>::KIND.label().to_lowercase()
                )));
            }
        }

        let result = E::update_many()
            .col_expr(col, Expr::value(active))
            .filter(E::id_column().is_in(ids.to_vec()))
            .exec(&txn)
            .await
            .map_err(map_db_err::<E::Item>)?;

        txn.commit().await.map_err(map_db_err::<E::Item>)?;

        Ok(result.rows_affected)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Serializes concurrent writers of one kind until the transaction ends.
async fn lock_kind<E: ContentTable>(txn: &DatabaseTransaction) -> Result<(), ContentRepositoryError> {
    if txn.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    let sql = format!(
        "LOCK TABLE {} IN SHARE ROW EXCLUSIVE MODE",
        E::default().table_name()
    );
    txn.execute_unprepared(&sql)
        .await
        .map_err(map_db_err::<E::Item>)?;

    Ok(())
}

async fn deactivate_others<E: ContentTable>(
    txn: &DatabaseTransaction,
    keep: Uuid,
) -> Result<(), ContentRepositoryError> {
    let Some(col) = E::active_column() else {
        return Ok(());
    };

    let result = E::update_many()
        .col_expr(col, Expr::value(false))
        .filter(col.eq(true))
        .filter(E::id_column().ne(keep))
        .exec(txn)
        .await
        .map_err(map_db_err::<E::Item>)?;

    if result.rows_affected > 0 {
        tracing::debug!(
            kind = %<E::Item as ContentItem>::KIND,
            deactivated = result.rows_affected,
            "Deactivated previously active records"
        );
    }

    Ok(())
}

fn map_db_err<T: ContentItem>(e: DbErr) -> ContentRepositoryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return ContentRepositoryError::ParentNotFound
        }
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return if T::SINGLETON {
                ContentRepositoryError::SingletonExists
            } else {
                ContentRepositoryError::Conflict(msg)
            };
        }
        _ => {}
    }

    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ContentRepositoryError::NotFound,
        other => ContentRepositoryError::DatabaseError(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
