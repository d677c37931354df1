use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, SubmitContactMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase>,
    pub messages: Arc<dyn ManageContactMessagesUseCase>,
}
