mod manage_content_service;

pub use manage_content_service::ManageContentService;
