//!
//! A single trial record.
//!

///
/// A single trial record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trial {
    /// The column key, equal for all trials of the same compiler configuration.
    pub key: String,
    /// The human-readable column label.
    pub label: String,
    /// The number of generated functions.
    pub function_count: usize,
    /// The elapsed seconds, if the trial succeeded.
    pub elapsed_seconds: Option<f64>,
    /// The peak resident memory in kilobytes, if measured.
    pub peak_memory_kb: Option<u64>,
}

impl Trial {
    ///
    /// A shortcut constructor for a successful trial.
    ///
    pub fn passed(
        key: String,
        label: String,
        function_count: usize,
        elapsed_seconds: f64,
        peak_memory_kb: Option<u64>,
    ) -> Self {
        Self {
            key,
            label,
            function_count,
            elapsed_seconds: Some(elapsed_seconds),
            peak_memory_kb,
        }
    }

    ///
    /// A shortcut constructor for a failed or skipped trial.
    ///
    pub fn failed(key: String, label: String, function_count: usize) -> Self {
        Self {
            key,
            label,
            function_count,
            elapsed_seconds: None,
            peak_memory_kb: None,
        }
    }

    ///
    /// Whether the trial completed.
    ///
    pub fn is_passed(&self) -> bool {
        self.elapsed_seconds.is_some()
    }
}
