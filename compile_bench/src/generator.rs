//!
//! The source generation collaborator.
//!

use std::path::Path;

use program_generator::Language;
use program_generator::Program;

///
/// Writes a source file of the requested size for a language.
///
/// Implementations must leave an existing file at the path untouched.
///
pub trait SourceGenerator {
    ///
    /// Whether sources can be generated for the language.
    ///
    fn supports(&self, language: &str) -> bool;

    ///
    /// Writes the source file, unless it already exists.
    ///
    fn generate(&self, language: &str, function_count: usize, path: &Path) -> anyhow::Result<()>;
}

///
/// The built-in template generator.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgramGenerator;

impl SourceGenerator for ProgramGenerator {
    fn supports(&self, language: &str) -> bool {
        language.parse::<Language>().is_ok()
    }

    fn generate(&self, language: &str, function_count: usize, path: &Path) -> anyhow::Result<()> {
        let language: Language = language.parse()?;
        Program::new(language, function_count).write(path)?;
        Ok(())
    }
}
