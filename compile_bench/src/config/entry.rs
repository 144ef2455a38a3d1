//!
//! The compiler list config entry.
//!

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::descriptor::Descriptor;

///
/// The compiler list config entry.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// The source language name.
    pub language: String,
    /// The source file extension.
    pub extension: String,
    /// The compiler executable, as a path or a name looked up in `PATH`.
    pub executable: String,
    /// The compiler arguments preceding the source file name.
    #[serde(default)]
    pub arguments: Vec<String>,
    /// The extra environment variables.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
    /// Whether the entry is benchmarked.
    #[serde(default = "Entry::default_is_enabled")]
    pub is_enabled: bool,
}

impl Entry {
    ///
    /// Entries are enabled unless stated otherwise.
    ///
    fn default_is_enabled() -> bool {
        true
    }
}

impl TryFrom<Entry> for Descriptor {
    type Error = crate::descriptor::Error;

    fn try_from(entry: Entry) -> Result<Self, Self::Error> {
        Descriptor::new(
            entry.language,
            entry.extension,
            entry.executable,
            entry.arguments,
            entry.environment,
        )
    }
}
