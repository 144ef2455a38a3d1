//!
//! The synthetic program generator library.
//!

pub mod dialect;
pub mod language;
pub mod program;

pub use self::language::Language;
pub use self::program::Program;
