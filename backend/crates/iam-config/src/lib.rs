mod api_config;
mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;

pub const CONFIG_DIR_ENV_VAR: &str = "IAM_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".iam";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:3002";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
