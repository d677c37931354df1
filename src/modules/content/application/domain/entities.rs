use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::content_item::{ContentItem, ContentKind};
use crate::shared::validation::FieldErrors;

/// Largest value an integer column accepts.
pub const MAX_STORED_INT: u32 = i32::MAX as u32;

fn default_true() -> bool {
    true
}

fn check_order(errors: &mut FieldErrors, order: u32) {
    errors.at_most("display_order", order, MAX_STORED_INT);
}

// =====================================================
// Choice fields
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
}

macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownChoice {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(SectionType, "section_type", {
    Background => ("background", "Background"),
    Philosophy => ("philosophy", "Philosophy"),
    Focus => ("focus", "Current Focus"),
});

choice_enum!(TimelineCategory, "category", {
    Education => ("education", "Education"),
    Career => ("career", "Career"),
    Future => ("future", "Future Plans"),
});

choice_enum!(Platform, "platform", {
    Github => ("github", "GitHub"),
    Linkedin => ("linkedin", "LinkedIn"),
    Twitter => ("twitter", "Twitter/X"),
    Codepen => ("codepen", "CodePen"),
    Instagram => ("instagram", "Instagram"),
    Youtube => ("youtube", "YouTube"),
});

// =====================================================
// Header title
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderTitle {
    pub title: String,
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for HeaderTitle {
    const KIND: ContentKind = ContentKind::HeaderTitle;
    const SINGLE_ACTIVE: bool = true;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("subtitle", &self.subtitle, 200);
        errors.into_result()
    }
}

// =====================================================
// Hero section
// =====================================================

fn default_hero_title() -> String {
    "Suraj".to_string()
}

fn default_projects_count() -> u32 {
    42
}

fn default_clients_count() -> u32 {
    28
}

fn default_experience_count() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default = "default_hero_title")]
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_projects_count")]
    pub projects_count: u32,
    #[serde(default = "default_clients_count")]
    pub clients_count: u32,
    #[serde(default = "default_experience_count")]
    pub experience_count: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for HeroSection {
    const KIND: ContentKind = ContentKind::HeroSection;
    const SINGLE_ACTIVE: bool = true;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("subtitle", &self.subtitle, 200);
        errors.optional_text("image", self.image.as_deref(), 500);
        errors.at_most("projects_count", self.projects_count, MAX_STORED_INT);
        errors.at_most("clients_count", self.clients_count, MAX_STORED_INT);
        errors.at_most("experience_count", self.experience_count, MAX_STORED_INT);
        errors.into_result()
    }
}

// =====================================================
// Quote
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for Quote {
    const KIND: ContentKind = ContentKind::Quote;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("text", &self.text, 5000);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

impl Quote {
    /// First 50 characters, with an ellipsis when cut.
    pub fn excerpt(&self) -> String {
        if self.text.chars().count() > 50 {
            let head: String = self.text.chars().take(50).collect();
            format!("{head}...")
        } else {
            self.text.clone()
        }
    }
}

// =====================================================
// About section
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub content: String,
    pub section_type: SectionType,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for AboutSection {
    const KIND: ContentKind = ContentKind::AboutSection;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("content", &self.content, 20_000);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Timeline item
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub title: String,
    pub period: String,
    pub description: String,
    pub category: TimelineCategory,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for TimelineItem {
    const KIND: ContentKind = ContentKind::TimelineItem;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("period", &self.period, 100);
        errors.required_text("description", &self.description, 20_000);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Skill
// =====================================================

fn default_proficiency() -> u32 {
    80
}

fn default_skill_icon() -> String {
    "fas fa-code".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100.
    #[serde(default = "default_proficiency")]
    pub proficiency: u32,
    #[serde(default = "default_skill_icon")]
    pub icon: String,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for Skill {
    const KIND: ContentKind = ContentKind::Skill;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("name", &self.name, 100);
        errors.at_most("proficiency", self.proficiency, 100);
        errors.required_text("icon", &self.icon, 50);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Certificate
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for Certificate {
    const KIND: ContentKind = ContentKind::Certificate;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("issuer", &self.issuer, 200);
        errors.required_text("description", &self.description, 20_000);
        errors.required_text("image", &self.image, 500);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Project
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for Project {
    const KIND: ContentKind = ContentKind::Project;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 200);
        errors.required_text("description", &self.description, 20_000);
        errors.optional_url("demo_link", self.demo_link.as_deref());
        errors.optional_url("github_link", self.github_link.as_deref());
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Project image
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub project_id: Uuid,
    pub image: String,
    pub alt_text: String,
    #[serde(default)]
    pub display_order: u32,
}

impl ContentItem for ProjectImage {
    const KIND: ContentKind = ContentKind::ProjectImage;

    fn display_order(&self) -> u32 {
        self.display_order
    }

    fn set_display_order(&mut self, order: u32) {
        self.display_order = order;
    }

    fn parent_id(&self) -> Option<Uuid> {
        Some(self.project_id)
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("image", &self.image, 500);
        errors.required_text("alt_text", &self.alt_text, 200);
        check_order(&mut errors, self.display_order);
        errors.into_result()
    }
}

// =====================================================
// Contact info
// =====================================================

fn default_contact_title() -> String {
    "Get In Touch".to_string()
}

fn default_contact_description() -> String {
    "I'm currently available for freelance work and interesting projects. Feel free to reach out!"
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default = "default_contact_title")]
    pub title: String,
    #[serde(default = "default_contact_description")]
    pub description: String,
    pub email: String,
    pub address: String,
}

impl ContentItem for ContactInfo {
    const KIND: ContentKind = ContentKind::ContactInfo;
    const SINGLETON: bool = true;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_text("title", &self.title, 100);
        errors.required_text("description", &self.description, 5000);
        errors.email("email", &self.email, 254);
        errors.required_text("address", &self.address, 255);
        errors.into_result()
    }
}

// =====================================================
// Social link
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub url: String,
    /// Icon class, e.g. `fab fa-github`.
    pub icon: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ContentItem for SocialLink {
    const KIND: ContentKind = ContentKind::SocialLink;

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required_url("url", &self.url);
        errors.required_text("icon", &self.icon, 100);
        errors.into_result()
    }
}
