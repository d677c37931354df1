use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use super::content_item::{ContentItem, Record};
use super::entities::{Project, ProjectImage};

/// Display sequence: `display_order`, then creation time, then id.
///
/// Kinds without `display_order` fall back to creation order.
pub fn sort_for_display<T: ContentItem>(records: &mut [Record<T>]) {
    records.sort_by(|a, b| {
        a.item
            .display_order()
            .cmp(&b.item.display_order())
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// A project with its images, as the page and the resume render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Record<Project>,
    pub images: Vec<Record<ProjectImage>>,
}

/// Attaches each image to its project. Projects keep their order; images
/// are put in display order; images of projects not in `projects` are dropped.
pub fn attach_images(
    projects: Vec<Record<Project>>,
    images: Vec<Record<ProjectImage>>,
) -> Vec<ProjectCard> {
    let mut by_project: HashMap<Uuid, Vec<Record<ProjectImage>>> = HashMap::new();
    for image in images {
        by_project
            .entry(image.item.project_id)
            .or_default()
            .push(image);
    }

    projects
        .into_iter()
        .map(|project| {
            let mut images = by_project.remove(&project.id).unwrap_or_default();
            sort_for_display(&mut images);
            ProjectCard { project, images }
        })
        .collect()
}
