//! Gateway configuration: defaults, optional config file, then `PROMPTCRAFTER__*` environment.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Name shown in startup logs.
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    /// When set, logs are also written to daily rolling files in this directory.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_name: "PromptCrafter".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_allowed_origins: Vec::new(),
            log_dir: None,
        }
    }
}

impl GatewayConfig {
    /// Load config from file and environment. Precedence: env `PROMPTCRAFTER__*` > file
    /// (`PROMPTCRAFTER_CONFIG` path, else `config/gateway.*`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("PROMPTCRAFTER_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(&config_path).required(false))
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("PROMPTCRAFTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        built.try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
