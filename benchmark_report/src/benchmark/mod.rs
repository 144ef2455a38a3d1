//!
//! The compile-time benchmark representation.
//!

pub mod machine;
pub mod metadata;
pub mod trial;

use self::metadata::Metadata;
use self::trial::Trial;

///
/// The compile-time benchmark representation.
///
/// Trials are kept in the order they were produced, which defines the
/// column order of every pivoted view.
///
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct Benchmark {
    /// The run metadata.
    pub metadata: Metadata,
    /// The flat list of trial records.
    pub trials: Vec<Trial>,
}

impl Benchmark {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            trials: Vec::with_capacity(1024),
        }
    }

    ///
    /// Appends a trial record.
    ///
    pub fn push(&mut self, trial: Trial) {
        self.trials.push(trial);
    }

    ///
    /// Whether any trial carries a peak memory figure.
    ///
    pub fn has_memory(&self) -> bool {
        self.trials
            .iter()
            .any(|trial| trial.peak_memory_kb.is_some())
    }
}
