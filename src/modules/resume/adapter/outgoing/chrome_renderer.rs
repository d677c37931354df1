use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::path::PathBuf;

use super::resume_template::render_resume_html;
use crate::modules::resume::application::domain::resume::ResumeContext;
use crate::modules::resume::application::ports::outgoing::{ResumeRenderError, ResumeRenderer};

/// Prints the resume template to PDF with a headless Chrome.
///
/// A browser is launched per request and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct ChromeResumeRenderer {
    chrome_path: Option<PathBuf>,
}

impl ChromeResumeRenderer {
    /// `None` lets the launcher look for Chrome on the system.
    pub fn new(chrome_path: Option<PathBuf>) -> Self {
        Self { chrome_path }
    }
}

pub(crate) fn html_data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html))
}

fn print_pdf(html: String, chrome_path: Option<PathBuf>) -> Result<Vec<u8>, ResumeRenderError> {
    let browser = Browser::new(LaunchOptions {
        headless: true,
        path: chrome_path,
        ..Default::default()
    })
    .map_err(|e| ResumeRenderError::BrowserUnavailable(e.to_string()))?;

    let tab = browser
        .new_tab()
        .map_err(|e| ResumeRenderError::BrowserUnavailable(e.to_string()))?;

    tab.navigate_to(&html_data_url(&html))
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| ResumeRenderError::Conversion(e.to_string()))?;

    tab.print_to_pdf(Some(PrintToPdfOptions {
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        ..Default::default()
    }))
    .map_err(|e| ResumeRenderError::Conversion(e.to_string()))
}

#[async_trait]
impl ResumeRenderer for ChromeResumeRenderer {
    async fn render(&self, context: &ResumeContext) -> Result<Vec<u8>, ResumeRenderError> {
        let html = render_resume_html(context).into_string();
        let chrome_path = self.chrome_path.clone();

        tokio::task::spawn_blocking(move || print_pdf(html, chrome_path))
            .await
            .map_err(|e| ResumeRenderError::TaskFailed(e.to_string()))?
    }
}
