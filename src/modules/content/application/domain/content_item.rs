use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Content kinds
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    HeaderTitle,
    HeroSection,
    Quote,
    AboutSection,
    TimelineItem,
    Skill,
    Certificate,
    Project,
    ProjectImage,
    ContactInfo,
    SocialLink,
}

impl ContentKind {
    pub const ALL: [ContentKind; 11] = [
        ContentKind::HeaderTitle,
        ContentKind::HeroSection,
        ContentKind::Quote,
        ContentKind::AboutSection,
        ContentKind::TimelineItem,
        ContentKind::Skill,
        ContentKind::Certificate,
        ContentKind::Project,
        ContentKind::ProjectImage,
        ContentKind::ContactInfo,
        ContentKind::SocialLink,
    ];

    /// URL segment under `/api/admin`.
    pub fn path(self) -> &'static str {
        match self {
            ContentKind::HeaderTitle => "header-titles",
            ContentKind::HeroSection => "hero-sections",
            ContentKind::Quote => "quotes",
            ContentKind::AboutSection => "about-sections",
            ContentKind::TimelineItem => "timeline-items",
            ContentKind::Skill => "skills",
            ContentKind::Certificate => "certificates",
            ContentKind::Project => "projects",
            ContentKind::ProjectImage => "project-images",
            ContentKind::ContactInfo => "contact-info",
            ContentKind::SocialLink => "social-links",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::HeaderTitle => "Header title",
            ContentKind::HeroSection => "Hero section",
            ContentKind::Quote => "Quote",
            ContentKind::AboutSection => "About section",
            ContentKind::TimelineItem => "Timeline item",
            ContentKind::Skill => "Skill",
            ContentKind::Certificate => "Certificate",
            ContentKind::Project => "Project",
            ContentKind::ProjectImage => "Project image",
            ContentKind::ContactInfo => "Contact info",
            ContentKind::SocialLink => "Social link",
        }
    }

    /// Kinds that carry `display_order`.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            ContentKind::Quote
                | ContentKind::AboutSection
                | ContentKind::TimelineItem
                | ContentKind::Skill
                | ContentKind::Certificate
                | ContentKind::Project
                | ContentKind::ProjectImage
        )
    }

    /// Kinds that carry `is_active`.
    pub fn has_active_flag(self) -> bool {
        !matches!(self, ContentKind::ProjectImage | ContentKind::ContactInfo)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

//
// ──────────────────────────────────────────────────────────
// Content item contract
// ──────────────────────────────────────────────────────────
//

/// The editable fields of one content kind.
///
/// Kinds without an `is_active` flag report `true` and ignore `set_active`;
/// kinds without `display_order` report `0`.
pub trait ContentItem:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ContentKind;

    /// At most one record of the kind may be active at a time.
    const SINGLE_ACTIVE: bool = false;

    /// At most one record of the kind may exist.
    const SINGLETON: bool = false;

    fn is_active(&self) -> bool {
        true
    }

    fn set_active(&mut self, _active: bool) {}

    fn display_order(&self) -> u32 {
        0
    }

    fn set_display_order(&mut self, _order: u32) {}

    /// Owning record, for kinds that live under another one.
    fn parent_id(&self) -> Option<Uuid> {
        None
    }

    fn validate(&self) -> Result<(), FieldErrors>;
}

/// A stored item: `{id, created_at, ...fields}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub item: T,
}

impl<T> Record<T> {
    pub fn new(id: Uuid, created_at: DateTime<Utc>, item: T) -> Self {
        Self {
            id,
            created_at,
            item,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub is_active: Option<bool>,
    pub parent_id: Option<Uuid>,
}

impl ListFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            parent_id: None,
        }
    }

    pub fn for_parent(parent_id: Uuid) -> Self {
        Self {
            is_active: None,
            parent_id: Some(parent_id),
        }
    }
}

/// Inline edit of the listing columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListingPatch {
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ListingPatch {
    pub fn is_empty(&self) -> bool {
        self.display_order.is_none() && self.is_active.is_none()
    }

    pub fn apply<T: ContentItem>(&self, item: &mut T) {
        if let Some(order) = self.display_order {
            item.set_display_order(order);
        }
        if let Some(active) = self.is_active {
            item.set_active(active);
        }
    }
}
