pub mod handlers;
pub mod invoker;
pub mod models;
pub mod page;
pub mod prompts;
