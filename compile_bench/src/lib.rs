//!
//! The compile-time benchmark library.
//!

pub mod config;
pub mod descriptor;
pub mod filters;
pub mod generator;
pub mod outcome;
pub mod sequencer;
pub mod sink;
pub mod summary;
pub mod timer;

pub use crate::config::Config;
pub use crate::descriptor::Descriptor;
pub use crate::filters::Filters;
pub use crate::generator::ProgramGenerator;
pub use crate::generator::SourceGenerator;
pub use crate::outcome::Outcome;
pub use crate::sequencer::Retention;
pub use crate::sequencer::Sequencer;
pub use crate::sequencer::SkipPolicy;
pub use crate::sequencer::Staircase;
pub use crate::sink::OutcomeSink;
pub use crate::sink::ResultLog;
pub use crate::summary::Summary;
pub use crate::timer::ProcessTimer;
pub use crate::timer::Settings as TimerSettings;
