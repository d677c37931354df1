mod manage_content;

pub use manage_content::{ManageContentError, ManageContentUseCase};
