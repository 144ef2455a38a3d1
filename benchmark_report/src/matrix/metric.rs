//!
//! The measured quantity shown in a matrix.
//!

use crate::benchmark::trial::Trial;

///
/// The measured quantity shown in a matrix.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Elapsed wall-clock seconds.
    #[default]
    Time,
    /// Peak resident memory in kilobytes.
    Memory,
}

impl Metric {
    ///
    /// Returns the caption used for headers and worksheet names.
    ///
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Time => "Time (seconds)",
            Self::Memory => "Memory (KB)",
        }
    }

    ///
    /// Extracts the metric value from a trial.
    ///
    pub fn extract(&self, trial: &Trial) -> Option<f64> {
        match self {
            Self::Time => trial.elapsed_seconds,
            Self::Memory => trial
                .elapsed_seconds
                .and(trial.peak_memory_kb)
                .map(|kilobytes| kilobytes as f64),
        }
    }

    /// The default number of decimal places of seconds.
    const TIME_PRECISION: usize = 3;

    ///
    /// Renders a cell value as text.
    ///
    /// Positive times below a millisecond get as many decimal places as
    /// needed to show their first significant digit, so they never read zero.
    ///
    pub fn render(&self, value: f64) -> String {
        match self {
            Self::Time => {
                let precision = if value > 0.0 {
                    (-value.log10().floor()).max(Self::TIME_PRECISION as f64) as usize
                } else {
                    Self::TIME_PRECISION
                };
                format!("{value:.precision$}")
            }
            Self::Memory => format!("{value:.0}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Metric;

    #[test]
    fn time_millisecond_precision() {
        assert_eq!(Metric::Time.render(1.23), "1.230");
        assert_eq!(Metric::Time.render(0.25), "0.250");
        assert_eq!(Metric::Time.render(61.0), "61.000");
    }

    #[test]
    fn time_below_millisecond_is_not_zero() {
        assert_eq!(Metric::Time.render(0.000734), "0.0007");
        assert_eq!(Metric::Time.render(0.0000042), "0.000004");
    }

    #[test]
    fn memory_whole_kilobytes() {
        assert_eq!(Metric::Memory.render(45678.0), "45678");
    }
}
