pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod list;
pub mod logging;
pub mod render;
