//! Builds `Settings` from layered TOML files and environment variables.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable prefix for overrides, e.g.
/// `BOARDGAMERS_SERVER__PORT=8080`.
const ENV_PREFIX: &str = "BOARDGAMERS";

pub struct ConfigLoader {
    environment: Environment,
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            config_dir: PathBuf::from("config"),
            config_file: None,
        }
    }

    /// Overrides the directory that holds the layered TOML files.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Adds an explicit configuration file on top of the layered files.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        let layer = |name: &str| {
            File::from(self.config_dir.join(name)).required(false)
        };

        let mut builder = Config::builder()
            .add_source(layer("default.toml"))
            .add_source(layer(&format!("{}.toml", self.environment)))
            .add_source(layer("local.toml"));

        if let Some(path) = &self.config_file {
            builder = builder.add_source(File::from(path.clone()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX).separator("__"),
        );

        let settings = builder.build()?.try_deserialize::<Settings>()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_when_no_files_exist() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConfigLoader::new(Environment::Test)
            .with_config_dir(dir.path())
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn environment_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[server]\nport = 4000\n").unwrap();
        std::fs::write(dir.path().join("test.toml"), "[server]\nport = 5000\n").unwrap();

        let settings = ConfigLoader::new(Environment::Test)
            .with_config_dir(dir.path())
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn explicit_file_overrides_layered_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[server]\nport = 4000\n").unwrap();
        let explicit = dir.path().join("override.toml");
        std::fs::write(&explicit, "[server]\nport = 6000\n").unwrap();

        let settings = ConfigLoader::new(Environment::Test)
            .with_config_dir(dir.path())
            .with_config_file(&explicit)
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 6000);
    }
}
