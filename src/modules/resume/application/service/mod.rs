pub mod export_resume_service;

pub use export_resume_service::ExportResumeService;
