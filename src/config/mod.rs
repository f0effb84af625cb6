//! Settings management

mod app_config;

pub use app_config::AppConfig;
pub use app_config::BuildMode;
pub use app_config::ConfigError;
pub use app_config::LogLevel;
