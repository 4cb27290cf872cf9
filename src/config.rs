// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CorpusError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub directory: PathBuf,
    pub suffix: String,
    pub lowercase: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CORPUS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                directory: PathBuf::from("./corpus"),
                suffix: ".txt".to_string(),
                lowercase: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.corpus.suffix.is_empty() {
            return Err(CorpusError::Config(
                "suffix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();

        assert_eq!(config.corpus.suffix, ".txt");
        assert!(config.corpus.lowercase);
    }

    #[test]
    fn test_validate_rejects_empty_suffix() {
        let mut config = Config::default_config();
        config.corpus.suffix = String::new();

        assert!(config.validate().is_err());
    }
}
