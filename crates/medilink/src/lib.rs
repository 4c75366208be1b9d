pub mod client;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod providers;
