use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The token secret has no default; startup fails if no source
    /// provides `jwt.secret`.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret. The source must
            // stay prefix-free: even an empty with_prefix("") filters on a
            // leading "__" and drops these spellings.
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so the whole load contract
    // runs in a single sequential test.
    #[test]
    fn test_load_layers_environment_over_files() {
        env::set_var("JWT__SECRET", "env-secret-key-at-least-32-bytes-long!");
        env::set_var("SERVER__HTTP_PORT", "9099");

        let config = Config::load().expect("Failed to load config");
        assert_eq!(config.jwt.secret, "env-secret-key-at-least-32-bytes-long!");
        assert_eq!(config.server.http_port, 9099);

        // Without the override the port falls back to config/default.toml
        env::remove_var("SERVER__HTTP_PORT");

        let config = Config::load().expect("Failed to load config");
        assert_eq!(config.server.http_port, 8787);

        // The secret has no file default; losing it makes loading fail
        env::remove_var("JWT__SECRET");

        assert!(Config::load().is_err());
    }
}
