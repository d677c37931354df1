use serde::Serialize;

use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::{
    AboutSection, Certificate, ContactInfo, HeaderTitle, HeroSection, Quote, SocialLink, Skill,
    TimelineItem,
};
use crate::modules::content::application::domain::ordering::ProjectCard;

pub const RESUME_FILENAME: &str = "resume.pdf";

/// Active content in display order, as the resume prints it.
///
/// Unlike the home page, timeline items stay in one list and every
/// contact info row is included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeContext {
    pub hero_sections: Vec<Record<HeroSection>>,
    pub header_titles: Vec<Record<HeaderTitle>>,
    pub about_sections: Vec<Record<AboutSection>>,
    pub timeline_items: Vec<Record<TimelineItem>>,
    pub skills: Vec<Record<Skill>>,
    pub certificates: Vec<Record<Certificate>>,
    pub projects: Vec<ProjectCard>,
    pub quotes: Vec<Record<Quote>>,
    pub contact_info: Vec<Record<ContactInfo>>,
    pub social_links: Vec<Record<SocialLink>>,
}

/// A rendered resume ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeDocument {
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            filename: RESUME_FILENAME,
            bytes,
        }
    }
}
