pub mod resume_renderer;

pub use resume_renderer::{ResumeRenderError, ResumeRenderer};
