//!
//! Information associated with the benchmark run.
//!

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::machine::Machine;

///
/// Information associated with the benchmark run.
///
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Start of the benchmark run.
    pub start: DateTime<Utc>,
    /// End of the benchmark run.
    pub end: DateTime<Utc>,
    /// The host the benchmark ran on.
    pub machine: Machine,
    /// The measurement strategy description.
    pub strategy: String,
}

impl Metadata {
    ///
    /// Creates the metadata of a run starting now.
    ///
    pub fn start(machine: Machine, strategy: String) -> Self {
        let now = Utc::now();
        Self {
            start: now,
            end: now,
            machine,
            strategy,
        }
    }

    ///
    /// Marks the run as finished now.
    ///
    pub fn finish(&mut self) {
        self.end = Utc::now();
    }
}
