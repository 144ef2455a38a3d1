//!
//! The synthetic program.
//!

use std::path::Path;

use crate::dialect;
use crate::dialect::Constants;
use crate::language::Language;

///
/// The synthetic program.
///
/// Rendering is deterministic, so a program of the same language and size
/// is byte-identical across runs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    /// The target language.
    pub language: Language,
    /// The number of generated functions.
    pub function_count: usize,
}

impl Program {
    /// The estimated length of a single rendered function.
    const FUNCTION_ESTIMATED_LENGTH: usize = 192;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(language: Language, function_count: usize) -> Self {
        Self {
            language,
            function_count,
        }
    }

    ///
    /// Renders the program source code.
    ///
    pub fn render(&self) -> String {
        let dialect = dialect::of(self.language);
        let mut output =
            String::with_capacity((self.function_count + 1) * Self::FUNCTION_ESTIMATED_LENGTH);

        dialect.prologue(&mut output);
        for index in 0..self.function_count {
            dialect.function(&mut output, index, Constants::new(index));
        }
        dialect.main_start(&mut output);
        for index in 0..self.function_count {
            dialect.call(&mut output, index);
        }
        dialect.main_end(&mut output);

        output
    }

    ///
    /// Writes the program to `path` unless a file already exists there.
    ///
    /// Returns whether the file has been written.
    ///
    pub fn write(&self, path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Source directory {parent:?} creating: {error}")
            })?;
        }
        std::fs::write(path, self.render())
            .map_err(|error| anyhow::anyhow!("Source file {path:?} writing: {error}"))?;
        Ok(true)
    }
}
