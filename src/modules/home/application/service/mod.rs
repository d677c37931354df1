pub mod assemble_home_page_service;

pub use assemble_home_page_service::AssembleHomePageService;
