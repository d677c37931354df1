pub mod content_item;
pub mod entities;
pub mod ordering;
