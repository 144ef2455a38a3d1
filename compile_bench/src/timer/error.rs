//!
//! The process timer error.
//!

use std::time::Duration;

///
/// The process timer error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The compiler ran and reported a non-zero exit code.
    #[error("`{executable}` exited with code {}", .exit_code.map(|code| code.to_string()).unwrap_or_else(|| "<signal>".to_owned()))]
    CompilationFailed {
        /// The compiler executable.
        executable: String,
        /// The compiler exit code, if it exited normally.
        exit_code: Option<i32>,
        /// The captured compiler output.
        output: Vec<String>,
    },
    /// The compiler or the wrapper could not be started.
    #[error("`{executable}` launching error: {reason}")]
    LaunchFailed {
        /// The executable that failed to start.
        executable: String,
        /// The failure description.
        reason: String,
    },
    /// The compiler exceeded the per-trial deadline and was killed.
    #[error("`{executable}` killed after exceeding the {}s deadline", .timeout.as_secs_f64())]
    TimedOut {
        /// The compiler executable.
        executable: String,
        /// The deadline.
        timeout: Duration,
    },
    /// The wrapper printed no parseable result line.
    #[error("`{wrapper}` printed no `{}` line while running `{executable}`", super::wrapper::marker::PREFIX)]
    ProtocolViolation {
        /// The wrapper executable.
        wrapper: String,
        /// The compiler executable.
        executable: String,
        /// The captured output.
        output: Vec<String>,
    },
}

impl Error {
    ///
    /// Whether the error means the measurement harness itself is broken.
    ///
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ProtocolViolation { .. })
    }
}
