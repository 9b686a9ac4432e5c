//! Doctor configuration.
//!
//! Loaded from environment variables via the `config` crate. Only the
//! fields for the selected mode need to be present.

use serde::Deserialize;

/// Configuration for the doctor binary.
#[derive(Debug, Deserialize)]
pub struct DoctorConfig {
    /// Base URL of the application server under test.
    #[serde(default)]
    pub base_url: String,

    /// Init-data payload to authenticate with in bootstrap mode.
    #[serde(default)]
    pub init_data: String,

    /// Icon content directory for style mode.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Output path for the generated stylesheet.
    #[serde(default = "default_stylesheet_path")]
    pub stylesheet_path: String,
}

fn default_content_dir() -> String {
    "deps/heroicons/optimized".to_string()
}

fn default_stylesheet_path() -> String {
    "assets/generated.css".to_string()
}

impl DoctorConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration values fail to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_correct_defaults() {
        let config: DoctorConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.base_url, "");
        assert_eq!(config.init_data, "");
        assert_eq!(config.content_dir, "deps/heroicons/optimized");
        assert_eq!(config.stylesheet_path, "assets/generated.css");
    }
}
