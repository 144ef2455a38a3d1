//!
//! The benchmark summary.
//!

pub mod element;

use colored::Colorize;

use crate::outcome::Outcome;
use crate::outcome::Status;
use crate::sink::OutcomeSink;

///
/// The benchmark summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The passed trials counter.
    passed: usize,
    /// The failed trials counter.
    failed: usize,
    /// The skipped trials counter.
    skipped: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            verbosity,
            quiet,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    ///
    /// The number of passed trials.
    ///
    pub fn passed(&self) -> usize {
        self.passed
    }

    ///
    /// The number of failed trials, not counting the skipped ones.
    ///
    pub fn failed(&self) -> usize {
        self.failed
    }

    ///
    /// The number of skipped trials.
    ///
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl OutcomeSink for Summary {
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        match outcome.status {
            Status::Passed(_) => self.passed += 1,
            Status::Failed(ref failure) if failure.is_skipped() => self.skipped += 1,
            Status::Failed(_) => self.failed += 1,
        }
        if self.quiet {
            return Ok(());
        }
        if let Some(string) = element::print(outcome, self.verbosity) {
            println!("{string}");
        }
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═════════════════╡ COMPILE-TIME BENCHMARK ╞═══════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "SKIPPED".bright_black(),
            self.skipped.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║               {:10} TRIALS                              ║",
            self.passed + self.failed + self.skipped,
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
