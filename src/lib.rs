pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod image_file;
pub mod logging;
pub mod notifier;
pub mod submission;
