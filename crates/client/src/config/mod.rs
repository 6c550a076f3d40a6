use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/client.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the managed backend (e.g. http://127.0.0.1:54321).
    pub base_url: String,
    /// Project API key sent with every request.
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:54321".to_string(),
            api_key: String::new(),
        }
    }
}

pub fn load() -> Result<AppConfig> {
    load_from(DEFAULT_CONFIG_PATH)
}

/// Loads configuration from an optional TOML file merged with
/// `GRUZZOLO_*` environment variables.
pub fn load_from(config_path: &str) -> Result<AppConfig> {
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("GRUZZOLO"));
    let settings: AppConfig = builder.build()?.try_deserialize()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_from("config/does-not-exist").unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:54321");
        assert!(settings.api_key.is_empty());
    }
}
