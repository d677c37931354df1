use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, SubmitContactMessageUseCase,
};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::home::application::ports::incoming::use_cases::AssembleHomePageUseCase;
use crate::modules::resume::application::ports::incoming::use_cases::ExportResumeUseCase;
use crate::tests::support::in_memory_content::in_memory_sources;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub (content starts as empty in-memory stores);
/// tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    content: ContentUseCases,
    submit_contact: Arc<dyn SubmitContactMessageUseCase>,
    contact_messages: Arc<dyn ManageContactMessagesUseCase>,
    home: Arc<dyn AssembleHomePageUseCase>,
    resume: Arc<dyn ExportResumeUseCase>,
    login_admin: Arc<dyn LoginAdminUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: ContentUseCases::from_sources(&in_memory_sources()),
            submit_contact: Arc::new(StubSubmitContact),
            contact_messages: Arc::new(StubManageMessages),
            home: Arc::new(StubAssembleHomePage),
            resume: Arc::new(StubExportResume),
            login_admin: Arc::new(StubLoginAdmin),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: ContentUseCases) -> Self {
        self.content = content;
        self
    }

    pub fn with_contact_submit(mut self, uc: Arc<dyn SubmitContactMessageUseCase>) -> Self {
        self.submit_contact = uc;
        self
    }

    pub fn with_contact_messages(mut self, uc: Arc<dyn ManageContactMessagesUseCase>) -> Self {
        self.contact_messages = uc;
        self
    }

    pub fn with_home(mut self, uc: Arc<dyn AssembleHomePageUseCase>) -> Self {
        self.home = uc;
        self
    }

    pub fn with_resume(mut self, uc: Arc<dyn ExportResumeUseCase>) -> Self {
        self.resume = uc;
        self
    }

    pub fn with_login_admin(mut self, uc: Arc<dyn LoginAdminUseCase>) -> Self {
        self.login_admin = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            contact: ContactUseCases {
                submit: self.submit_contact,
                messages: self.contact_messages,
            },
            home: self.home,
            resume: self.resume,
            login_admin: self.login_admin,
        })
    }
}
