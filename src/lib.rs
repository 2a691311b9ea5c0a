pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod project;
pub mod runner;
pub mod scaffold;
pub mod templates;
