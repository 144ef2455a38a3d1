//!
//! The outcome sinks.
//!

pub mod result_log;

use crate::outcome::Outcome;

pub use self::result_log::ResultLog;

///
/// Receives every trial outcome as soon as it is produced.
///
pub trait OutcomeSink {
    ///
    /// Records a single outcome.
    ///
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()>;

    ///
    /// Persists everything recorded so far.
    ///
    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T> OutcomeSink for &mut T
where
    T: OutcomeSink + ?Sized,
{
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        (**self).record(outcome)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        (**self).flush()
    }
}

impl<A, B> OutcomeSink for (A, B)
where
    A: OutcomeSink,
    B: OutcomeSink,
{
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        self.0.record(outcome)?;
        self.1.record(outcome)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.0.flush()?;
        self.1.flush()
    }
}

impl OutcomeSink for Vec<Outcome> {
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}
