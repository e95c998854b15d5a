pub mod config;
pub mod logging;
pub mod report;
pub mod utils;

pub use config::{AppConfig, ConfigError};
pub use report::OutputFormat;
