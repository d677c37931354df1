pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_content;
pub mod in_memory_messages;
pub mod stubs;
