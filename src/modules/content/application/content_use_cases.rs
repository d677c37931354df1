use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    AboutSection, Certificate, ContactInfo, HeaderTitle, HeroSection, Project, ProjectImage,
    Quote, SocialLink, Skill, TimelineItem,
};
use crate::modules::content::application::ports::incoming::use_cases::ManageContentUseCase;

#[derive(Clone)]
pub struct ContentUseCases {
    pub header_titles: Arc<dyn ManageContentUseCase<HeaderTitle>>,
    pub hero_sections: Arc<dyn ManageContentUseCase<HeroSection>>,
    pub quotes: Arc<dyn ManageContentUseCase<Quote>>,
    pub about_sections: Arc<dyn ManageContentUseCase<AboutSection>>,
    pub timeline_items: Arc<dyn ManageContentUseCase<TimelineItem>>,
    pub skills: Arc<dyn ManageContentUseCase<Skill>>,
    pub certificates: Arc<dyn ManageContentUseCase<Certificate>>,
    pub projects: Arc<dyn ManageContentUseCase<Project>>,
    pub project_images: Arc<dyn ManageContentUseCase<ProjectImage>>,
    pub contact_info: Arc<dyn ManageContentUseCase<ContactInfo>>,
    pub social_links: Arc<dyn ManageContentUseCase<SocialLink>>,
}
