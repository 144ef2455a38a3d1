//!
//! The process timer measurement.
//!

use std::time::Duration;

///
/// The process timer measurement.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// The elapsed wall-clock time.
    pub elapsed: Duration,
    /// The peak resident memory in kilobytes, if the strategy can measure it.
    pub peak_memory_kb: Option<u64>,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(elapsed: Duration, peak_memory_kb: Option<u64>) -> Self {
        Self {
            elapsed,
            peak_memory_kb,
        }
    }
}
