//! Layered configuration loading.
//!
//! # Configuration priority (lowest to highest)
//! 1. `config/default.toml`
//! 2. `config/{environment}.toml`
//! 3. `config/local.toml` - local overrides, not committed
//! 4. `BOARDGAMERS_*` environment variables (`__` as section separator)

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, JwtConfig, LoggerSettings, Settings};
