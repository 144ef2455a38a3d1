//!
//! The compiler list config.
//!

pub mod entry;
pub mod error;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::descriptor::Descriptor;

use self::entry::Entry;
pub use self::error::Error;

///
/// The compiler list config.
///
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The compiler configurations, in benchmarking order.
    pub compilers: Vec<Entry>,
}

///
/// The validated compiler list.
///
#[derive(Debug, Default)]
pub struct Descriptors {
    /// The unique descriptors, in configuration order.
    pub unique: Vec<Arc<Descriptor>>,
    /// The dropped duplicates.
    pub duplicates: Vec<Descriptor>,
}

impl Config {
    ///
    /// Reads the config, as YAML for `.yaml` and `.yml` files and as JSON otherwise.
    ///
    pub fn read(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;
        if text.trim().is_empty() {
            return Err(Error::Empty {
                path: path.to_owned(),
            });
        }

        let is_yaml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| matches!(extension.to_lowercase().as_str(), "yaml" | "yml"))
            .unwrap_or(false);
        if is_yaml {
            serde_yaml::from_str(text.as_str()).map_err(|error| Error::ParsingYaml {
                error,
                path: path.to_owned(),
            })
        } else {
            serde_json::from_str(text.as_str()).map_err(|error| Error::ParsingJson {
                error,
                path: path.to_owned(),
            })
        }
    }

    ///
    /// Validates the enabled entries, dropping duplicates after the first occurrence.
    ///
    pub fn into_descriptors(self) -> anyhow::Result<Descriptors> {
        let mut descriptors = Descriptors::default();
        let mut seen = HashSet::with_capacity(self.compilers.len());

        for (index, entry) in self.compilers.into_iter().enumerate() {
            if !entry.is_enabled {
                continue;
            }
            let descriptor = Descriptor::try_from(entry)
                .map_err(|error| anyhow::anyhow!("Compiler entry #{index}: {error}"))?;
            if seen.insert(descriptor.key()) {
                descriptors.unique.push(Arc::new(descriptor));
            } else {
                descriptors.duplicates.push(descriptor);
            }
        }

        Ok(descriptors)
    }
}
