use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pantryplan_narration::NarrationConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub narration: NarrationConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file overlaid with
    /// `PANTRYPLAN__`-prefixed environment variables
    /// (e.g. `PANTRYPLAN__NARRATION__API_KEY`).
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        builder
            .add_source(Environment::with_prefix("PANTRYPLAN").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.path().join("pantryplan.toml");
        std::fs::write(
            &path,
            "log_level = \"debug\"\n\n\
             [narration]\n\
             api_url = \"https://generativelanguage.googleapis.com\"\n\
             api_key = \"k\"\n",
        )
        .unwrap();

        let config = Config::load(path.to_str()).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.narration.api_key, "k");
        assert_eq!(config.narration.max_attempts, 5);
    }
}
