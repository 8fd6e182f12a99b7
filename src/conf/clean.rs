use serde::{Deserialize, Serialize};

use crate::core::ScourError::{self, ConfigParsingError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CleanConfig {
    #[serde(default = "CleanConfig::default_date_format")]
    pub date_format: String,
    #[serde(default = "CleanConfig::default_delimiter")]
    pub delimiter: char,
}

impl CleanConfig {
    fn default_date_format() -> String {
        String::from("%Y-%m-%d")
    }

    fn default_delimiter() -> char {
        ','
    }

    /// The csv reader takes a single byte, so the delimiter must be ASCII.
    pub fn delimiter_byte(&self) -> Result<u8, ScourError> {
        delimiter_byte(self.delimiter)
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            date_format: Self::default_date_format(),
            delimiter: Self::default_delimiter(),
        }
    }
}

pub fn delimiter_byte(delimiter: char) -> Result<u8, ScourError> {
    if !delimiter.is_ascii() {
        return Err(ConfigParsingError(format!(
            "delimiter must be an ASCII character, got '{delimiter}'"
        )));
    }
    Ok(delimiter as u8)
}
