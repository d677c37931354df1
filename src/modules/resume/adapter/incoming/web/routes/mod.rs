pub mod resume;

pub use resume::download_resume;
