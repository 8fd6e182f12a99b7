mod clean;
mod config;

pub use clean::{CleanConfig, delimiter_byte};
pub use config::Config;
