pub mod commands;
pub mod completions;
pub mod config;
pub mod content;
pub mod logging;
pub mod models;
pub mod playground;
pub mod search;
pub mod utils;
pub mod view;
