pub mod commands;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod github;
pub mod harvest;
pub mod models;
pub mod probe;
pub mod ui;
pub mod windows;
pub mod wordlist;

pub use models::*;
