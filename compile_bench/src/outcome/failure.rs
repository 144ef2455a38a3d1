//!
//! The trial failure.
//!

use std::time::Duration;

use crate::timer::Error as TimerError;

///
/// The reason a trial did not produce a measurement.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The compiler reported an error.
    CompilationFailed {
        /// The exit code, if the compiler exited normally.
        exit_code: Option<i32>,
        /// The captured compiler output.
        output: Vec<String>,
    },
    /// The compiler or the wrapper could not be started.
    LaunchFailed {
        /// The failure description.
        reason: String,
    },
    /// The compiler was killed at the deadline.
    TimedOut {
        /// The deadline.
        timeout: Duration,
    },
    /// The trial was not run because the descriptor failed at a smaller size.
    Skipped {
        /// The size of the first failure.
        since: usize,
    },
}

impl Failure {
    ///
    /// A short description for the console.
    ///
    pub fn details(&self) -> String {
        match self {
            Self::CompilationFailed {
                exit_code: Some(code),
                ..
            } => format!("exit code {code}"),
            Self::CompilationFailed {
                exit_code: None, ..
            } => "terminated by signal".to_owned(),
            Self::LaunchFailed { reason } => reason.to_owned(),
            Self::TimedOut { timeout } => format!("timed out after {}s", timeout.as_secs_f64()),
            Self::Skipped { since } => format!("failed at {since} functions"),
        }
    }

    ///
    /// The captured compiler output, if any.
    ///
    pub fn output(&self) -> &[String] {
        match self {
            Self::CompilationFailed { output, .. } => output.as_slice(),
            _ => &[],
        }
    }

    ///
    /// Whether the trial has been skipped.
    ///
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

impl TryFrom<TimerError> for Failure {
    type Error = TimerError;

    ///
    /// Converts a per-trial timer error, passing fatal ones back.
    ///
    fn try_from(error: TimerError) -> Result<Self, Self::Error> {
        match error {
            TimerError::CompilationFailed {
                exit_code, output, ..
            } => Ok(Self::CompilationFailed { exit_code, output }),
            error @ TimerError::LaunchFailed { .. } => Ok(Self::LaunchFailed {
                reason: error.to_string(),
            }),
            TimerError::TimedOut { timeout, .. } => Ok(Self::TimedOut { timeout }),
            error @ TimerError::ProtocolViolation { .. } => Err(error),
        }
    }
}
