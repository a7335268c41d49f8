pub mod config;
pub mod content;
pub mod history;
pub mod play;
