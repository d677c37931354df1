pub mod assemble_home_page;

pub use assemble_home_page::{AssembleHomePageError, AssembleHomePageUseCase};
