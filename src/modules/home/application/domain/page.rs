use serde::Serialize;

use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::{
    AboutSection, Certificate, ContactInfo, HeaderTitle, HeroSection, Quote, SocialLink, Skill,
    TimelineCategory, TimelineItem,
};
use crate::modules::content::application::domain::ordering::ProjectCard;

/// Timeline items split by category, each group in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineGroups {
    pub education: Vec<Record<TimelineItem>>,
    pub career: Vec<Record<TimelineItem>>,
    pub future: Vec<Record<TimelineItem>>,
}

impl TimelineGroups {
    /// Stable partition: relative order inside each group is kept.
    pub fn partition(items: Vec<Record<TimelineItem>>) -> Self {
        let mut groups = Self::default();
        for item in items {
            match item.item.category {
                TimelineCategory::Education => groups.education.push(item),
                TimelineCategory::Career => groups.career.push(item),
                TimelineCategory::Future => groups.future.push(item),
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.education.is_empty() && self.career.is_empty() && self.future.is_empty()
    }
}

/// Everything the home page renders. Empty kinds stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomePage {
    pub header_title: Option<Record<HeaderTitle>>,
    pub hero_section: Option<Record<HeroSection>>,
    pub quotes: Vec<Record<Quote>>,
    pub about_sections: Vec<Record<AboutSection>>,
    pub timeline: TimelineGroups,
    pub skills: Vec<Record<Skill>>,
    pub certificates: Vec<Record<Certificate>>,
    pub projects: Vec<ProjectCard>,
    pub contact_info: Option<Record<ContactInfo>>,
    pub social_links: Vec<Record<SocialLink>>,
}
