//!
//! The compiler filters.
//!

use std::collections::HashSet;

use crate::descriptor::Descriptor;

///
/// The compiler filters.
///
/// A filter matches if the field contains it, case-insensitively. An empty
/// filter set matches everything.
///
#[derive(Debug, Default)]
pub struct Filters {
    /// The language filters.
    language_filters: HashSet<String>,
    /// The compiler executable filters.
    compiler_filters: HashSet<String>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(language_filters: Vec<String>, compiler_filters: Vec<String>) -> Self {
        Self {
            language_filters: language_filters
                .into_iter()
                .map(|filter| filter.to_lowercase())
                .collect(),
            compiler_filters: compiler_filters
                .into_iter()
                .map(|filter| filter.to_lowercase())
                .collect(),
        }
    }

    ///
    /// Check if the descriptor is compatible with the filters.
    ///
    pub fn check(&self, descriptor: &Descriptor) -> bool {
        Self::matches(&self.language_filters, descriptor.language.as_str())
            && Self::matches(&self.compiler_filters, descriptor.executable.as_str())
    }

    fn matches(filters: &HashSet<String>, field: &str) -> bool {
        let field = field.to_lowercase();
        filters.is_empty() || filters.iter().any(|filter| field.contains(filter.as_str()))
    }
}
