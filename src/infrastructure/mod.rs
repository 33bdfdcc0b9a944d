//! Infrastructure layer - Settings file I/O

pub mod config;

pub use config::Config;
