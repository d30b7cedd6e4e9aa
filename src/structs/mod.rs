pub mod ai;
pub mod apply_options;
pub mod chat_message;
pub mod cli;
pub mod code_change_response;
pub mod config;
pub mod retry_policy;
