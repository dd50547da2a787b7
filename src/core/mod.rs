pub mod api_key;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod llm;
pub mod paths;
pub mod scrub;
pub mod state;
