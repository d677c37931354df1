use chrono::{DateTime, Utc};
use sea_orm::sea_query::DeleteStatement;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ActiveValue,
    EntityTrait,
};
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::content::application::domain::content_item::{ContentItem, Record};
use crate::modules::content::application::domain::entities::UnknownChoice;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

/// A table holding one content kind.
///
/// The column accessors tell the generic repository which optional
/// capabilities (ordering, active flag, owning record) the table has.
pub trait ContentTable: EntityTrait + Send + Sync + 'static {
    type Item: ContentItem;
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + Sync + 'static;

    fn id_column() -> Self::Column;

    fn created_at_column() -> Self::Column;

    fn display_order_column() -> Option<Self::Column> {
        None
    }

    fn active_column() -> Option<Self::Column> {
        None
    }

    fn parent_column() -> Option<Self::Column> {
        None
    }

    fn into_record(model: Self::Model) -> Result<Record<Self::Item>, ContentRepositoryError>;

    /// Every field set; `created_at` left untouched when `None`.
    fn to_active(id: Uuid, created_at: Option<DateTime<Utc>>, item: &Self::Item) -> Self::Active;

    /// Deletes of rows owned by record `id`, run in the same transaction.
    fn owned_rows(_id: Uuid) -> Vec<DeleteStatement> {
        Vec::new()
    }
}

// ============================================================================
// Column conversions
// ============================================================================

pub(crate) fn stored_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub(crate) fn domain_int(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

pub(crate) fn created_at_value(
    created_at: Option<DateTime<Utc>>,
) -> ActiveValue<DateTimeWithTimeZone> {
    match created_at {
        Some(ts) => ActiveValue::Set(ts.fixed_offset()),
        None => ActiveValue::NotSet,
    }
}

pub(crate) fn to_utc(ts: DateTimeWithTimeZone) -> DateTime<Utc> {
    ts.with_timezone(&Utc)
}

pub(crate) fn parse_choice<C>(raw: &str) -> Result<C, ContentRepositoryError>
where
    C: FromStr<Err = UnknownChoice>,
{
    raw.parse::<C>()
        .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
}

/// Blank optional text is stored as NULL.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
