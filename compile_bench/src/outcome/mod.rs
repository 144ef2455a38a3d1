//!
//! The trial outcome.
//!

pub mod error;
pub mod failure;

use std::sync::Arc;
use std::time::Duration;

use benchmark_report::Trial;

use crate::descriptor::Descriptor;
use crate::timer::Measurement;

pub use self::error::Error;
pub use self::failure::Failure;

///
/// The trial status.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The compiler succeeded.
    Passed(Measurement),
    /// The compiler failed or has not been run.
    Failed(Failure),
}

///
/// The result of one compiler run at one program size.
///
/// Outcomes are created once and never changed afterwards.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The compiler configuration.
    pub descriptor: Arc<Descriptor>,
    /// The number of generated functions.
    pub function_count: usize,
    /// The trial status.
    pub status: Status,
}

impl Outcome {
    ///
    /// Creates a successful outcome.
    ///
    /// # Errors
    /// If the measured duration is zero.
    ///
    pub fn success(
        descriptor: Arc<Descriptor>,
        function_count: usize,
        measurement: Measurement,
    ) -> Result<Self, Error> {
        if measurement.elapsed.is_zero() {
            return Err(Error::NonPositiveElapsed {
                label: descriptor.label(),
                function_count,
            });
        }
        Ok(Self {
            descriptor,
            function_count,
            status: Status::Passed(measurement),
        })
    }

    ///
    /// Creates a failed outcome.
    ///
    pub fn failure(descriptor: Arc<Descriptor>, function_count: usize, failure: Failure) -> Self {
        Self {
            descriptor,
            function_count,
            status: Status::Failed(failure),
        }
    }

    ///
    /// Creates an outcome for a trial skipped after a failure at a smaller size.
    ///
    pub fn skipped(descriptor: Arc<Descriptor>, function_count: usize, since: usize) -> Self {
        Self::failure(descriptor, function_count, Failure::Skipped { since })
    }

    ///
    /// Whether the compiler succeeded.
    ///
    pub fn succeeded(&self) -> bool {
        matches!(self.status, Status::Passed(_))
    }

    ///
    /// The elapsed time of a successful trial.
    ///
    pub fn elapsed(&self) -> Option<Duration> {
        match self.status {
            Status::Passed(measurement) => Some(measurement.elapsed),
            Status::Failed(_) => None,
        }
    }

    ///
    /// The peak memory of a successful trial, if measured.
    ///
    pub fn peak_memory_kb(&self) -> Option<u64> {
        match self.status {
            Status::Passed(measurement) => measurement.peak_memory_kb,
            Status::Failed(_) => None,
        }
    }
}

impl From<&Outcome> for Trial {
    fn from(outcome: &Outcome) -> Self {
        let key = outcome.descriptor.key();
        let label = outcome.descriptor.label();
        match outcome.status {
            Status::Passed(measurement) => Trial::passed(
                key,
                label,
                outcome.function_count,
                measurement.elapsed.as_secs_f64(),
                measurement.peak_memory_kb,
            ),
            Status::Failed(_) => Trial::failed(key, label, outcome.function_count),
        }
    }
}
