//!
//! The compiler list config error.
//!

use std::path::PathBuf;

///
/// The compiler list config error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the config file.
    #[error("Reading config file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the config file.
        path: PathBuf,
    },
    /// Error parsing the JSON config file.
    #[error("Parsing config file {path:?}: {error}")]
    ParsingJson {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the config file.
        path: PathBuf,
    },
    /// Error parsing the YAML config file.
    #[error("Parsing config file {path:?}: {error}")]
    ParsingYaml {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
        /// The path to the config file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Config file {path:?} is empty")]
    Empty {
        /// The path to the config file.
        path: PathBuf,
    },
}
