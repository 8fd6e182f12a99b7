use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScourError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("Cannot load input: {0}")]
    LoadError(String),
    #[error("Cannot write output: {0}")]
    WriteError(String),
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),
}

impl From<csv::Error> for ScourError {
    fn from(err: csv::Error) -> Self {
        ScourError::LoadError(err.to_string())
    }
}
