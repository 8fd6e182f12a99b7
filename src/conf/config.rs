use std::path::Path;

use config::Config as CConfig;
use serde::{Deserialize, Serialize};

use crate::{
    conf::CleanConfig,
    core::ScourError::{self, ConfigParsingError},
};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub clean: CleanConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, ScourError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }

    pub fn from_file(path: &Path) -> Result<Config, ScourError> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| ConfigParsingError(e.to_string()))?;
        Self::from_str(&raw)
    }
}
