pub mod api;
pub mod config;
pub mod error;
pub mod import;
pub mod scene;
pub mod tables;
pub mod voice;
