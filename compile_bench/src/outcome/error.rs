//!
//! The trial outcome error.
//!

///
/// The trial outcome error.
///
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A successful measurement must carry a positive duration.
    #[error("`{label}` at {function_count} functions: successful trial with zero elapsed time")]
    NonPositiveElapsed {
        /// The descriptor label.
        label: String,
        /// The number of generated functions.
        function_count: usize,
    },
}
