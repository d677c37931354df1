use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminUseCase, LoginResult,
};
use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageFilter,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, ManageMessagesError, SubmitContactError,
    SubmitContactMessageUseCase,
};
use crate::modules::home::application::domain::page::HomePage;
use crate::modules::home::application::ports::incoming::use_cases::{
    AssembleHomePageError, AssembleHomePageUseCase,
};
use crate::modules::resume::application::domain::resume::ResumeDocument;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ExportResumeError, ExportResumeUseCase,
};

#[derive(Default, Clone)]
pub struct StubAssembleHomePage;

#[async_trait]
impl AssembleHomePageUseCase for StubAssembleHomePage {
    async fn execute(&self) -> Result<HomePage, AssembleHomePageError> {
        Ok(HomePage::default())
    }
}

#[derive(Default, Clone)]
pub struct StubExportResume;

#[async_trait]
impl ExportResumeUseCase for StubExportResume {
    async fn execute(&self) -> Result<ResumeDocument, ExportResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContact;

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContact {
    async fn execute(&self, _form: ContactForm) -> Result<ContactMessage, SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubManageMessages;

#[async_trait]
impl ManageContactMessagesUseCase for StubManageMessages {
    async fn list(&self, _filter: MessageFilter) -> Result<Vec<ContactMessage>, ManageMessagesError> {
        unimplemented!("Not used in this test")
    }

    async fn get(&self, _id: Uuid) -> Result<ContactMessage, ManageMessagesError> {
        unimplemented!("Not used in this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ManageMessagesError> {
        unimplemented!("Not used in this test")
    }

    async fn mark(&self, _ids: Vec<Uuid>, _read: bool) -> Result<u64, ManageMessagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginAdmin;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdmin {
    async fn execute(
        &self,
        _username: &str,
        _password: &str,
    ) -> Result<LoginResult, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}
