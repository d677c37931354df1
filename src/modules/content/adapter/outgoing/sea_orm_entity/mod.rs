pub mod about_sections;
pub mod certificates;
pub mod contact_info;
pub mod header_titles;
pub mod hero_sections;
pub mod project_images;
pub mod projects;
pub mod quotes;
pub mod skills;
pub mod social_links;
pub mod timeline_items;
