pub mod chrome_renderer;
pub mod resume_template;

pub use chrome_renderer::ChromeResumeRenderer;
