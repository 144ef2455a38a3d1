//!
//! The trial descriptor.
//!

pub mod error;

use std::collections::BTreeMap;

pub use self::error::Error;

///
/// The trial descriptor.
///
/// Identifies one compiler configuration. Two descriptors are equal if their
/// executables and joined arguments match case-insensitively. The language
/// and the environment are not part of the identity.
///
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// The language display name, grouping compilers.
    pub language: String,
    /// The source file extension, without the leading dot.
    pub extension: String,
    /// The compiler executable name or path.
    pub executable: String,
    /// The extra compiler arguments, passed before the source file.
    pub arguments: Vec<String>,
    /// The environment variables set for the compiler process.
    pub environment: BTreeMap<String, String>,
}

impl Descriptor {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        language: String,
        extension: String,
        executable: String,
        arguments: Vec<String>,
        environment: BTreeMap<String, String>,
    ) -> Result<Self, Error> {
        let extension = extension.trim().trim_start_matches('.').to_owned();
        for (field, value) in [
            ("language", &language),
            ("extension", &extension),
            ("executable", &executable),
        ] {
            if value.trim().is_empty() {
                return Err(Error::BlankField { field });
            }
        }

        Ok(Self {
            language,
            extension,
            executable,
            arguments,
            environment,
        })
    }

    ///
    /// Returns the identity key used for deduplication and report columns.
    ///
    pub fn key(&self) -> String {
        format!("{} {}", self.executable, self.arguments.join(" "))
            .trim_end()
            .to_lowercase()
    }

    ///
    /// Returns the label in the `<language> (<executable> [<arguments>])` form.
    ///
    pub fn label(&self) -> String {
        format!(
            "{} ({} [{}])",
            self.language,
            self.executable,
            self.arguments.join(" ")
        )
    }

    ///
    /// Returns the generated source file name.
    ///
    /// The stem is derived from the language, so that languages sharing a
    /// size directory do not overwrite each other's sources.
    ///
    pub fn source_file_name(&self) -> String {
        let stem: String = self
            .language
            .trim()
            .to_lowercase()
            .chars()
            .map(|character| match character {
                '+' => "p".to_owned(),
                '#' => "sharp".to_owned(),
                character if character.is_ascii_alphanumeric() => character.to_string(),
                _ => "_".to_owned(),
            })
            .collect();
        format!("{stem}.{}", self.extension)
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Descriptor {}

impl std::hash::Hash for Descriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
