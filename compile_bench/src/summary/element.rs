//!
//! The benchmark summary element.
//!

use colored::Colorize;

use benchmark_report::Metric;

use crate::outcome::Outcome;
use crate::outcome::Status;

///
/// Prints the outcome line, with the compiler output of failures if `verbosity` is set.
///
/// Successful trials are only printed with `verbosity`.
///
pub fn print(outcome: &Outcome, verbosity: bool) -> Option<String> {
    if outcome.succeeded() && !verbosity {
        return None;
    }

    let (status, details) = match outcome.status {
        Status::Passed(measurement) => {
            let mut details = vec![format!(
                "{}s",
                Metric::Time.render(measurement.elapsed.as_secs_f64())
            )
            .bright_white()
            .to_string()];
            if let Some(memory) = measurement.peak_memory_kb {
                details.push(format!("{memory} KB").bright_white().to_string());
            }
            ("PASSED".green(), details.join(", "))
        }
        Status::Failed(ref failure) if failure.is_skipped() => {
            ("SKIPPED".bright_black(), failure.details())
        }
        Status::Failed(ref failure) => ("FAILED".bright_red(), failure.details()),
    };

    let mut string = format!(
        "{:>8} {:>7} {} ({})",
        outcome.function_count.to_string().bright_white(),
        status,
        outcome.descriptor.label(),
        details
    );
    if let Status::Failed(ref failure) = outcome.status {
        if verbosity {
            for line in failure.output().iter() {
                string.push('\n');
                string.push_str(format!("{:17}{line}", "").as_str());
            }
        }
    }
    Some(string)
}
