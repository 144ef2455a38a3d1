//!
//! The trial descriptor error.
//!

///
/// The trial descriptor error.
///
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A mandatory field is empty or whitespace.
    #[error("Trial descriptor field `{field}` must not be blank")]
    BlankField {
        /// The field name.
        field: &'static str,
    },
}
