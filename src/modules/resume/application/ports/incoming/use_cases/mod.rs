pub mod export_resume;

pub use export_resume::{ExportResumeError, ExportResumeUseCase};
