//!
//! The wrapper result line.
//!

use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

/// The prefix of the result line.
pub const PREFIX: &str = "RESULT:";

/// The wrapper format string producing the result line: exit code, elapsed seconds, peak memory in kilobytes.
pub const FORMAT: &str = "RESULT: %x %e %M";

/// The result line pattern.
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^RESULT:\s+(-?\d+)\s+(\d+(?:\.\d+)?)\s+(\d+)\s*$").expect("Always valid")
});

///
/// The parsed wrapper result line.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// The exit code of the wrapped command.
    pub exit_code: i32,
    /// The elapsed wall-clock time as reported by the wrapper.
    pub elapsed: Duration,
    /// The maximum resident set size in kilobytes.
    pub peak_memory_kb: u64,
}

impl Marker {
    ///
    /// Finds the last parseable result line.
    ///
    /// The wrapper prints its line after the wrapped command exits, so any
    /// earlier match is compiler output that happens to look alike.
    ///
    pub fn scan(lines: &[String]) -> Option<Self> {
        lines.iter().rev().find_map(|line| line.parse().ok())
    }

    ///
    /// Whether the wrapped command succeeded.
    ///
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

impl FromStr for Marker {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let captures = PATTERN
            .captures(string.trim())
            .ok_or_else(|| anyhow::anyhow!("Not a result line: `{string}`"))?;

        let exit_code = captures[1].parse::<i32>()?;
        let elapsed = captures[2].parse::<f64>()?;
        let peak_memory_kb = captures[3].parse::<u64>()?;

        Ok(Self {
            exit_code,
            elapsed: Duration::from_millis((elapsed * 1000.0).round() as u64),
            peak_memory_kb,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Marker;

    #[test]
    fn success_line() {
        let marker: Marker = "RESULT: 0 1.23 45678".parse().expect("Valid");
        assert!(marker.is_success());
        assert_eq!(marker.elapsed, Duration::from_millis(1230));
        assert_eq!(marker.peak_memory_kb, 45678);
    }

    #[test]
    fn failure_line() {
        let marker: Marker = "RESULT: 1 0.50 1000".parse().expect("Valid");
        assert!(!marker.is_success());
        assert_eq!(marker.exit_code, 1);
    }

    #[test]
    fn malformed_lines_rejected() {
        for line in ["RESULT:", "RESULT: x 1.0 10", "RESULT: 0 1.0", "result: 0 1.0 10", ""] {
            assert!(line.parse::<Marker>().is_err(), "{line}");
        }
    }

    #[test]
    fn scan_tolerates_trailing_noise() {
        let lines = vec![
            "main.c: warning: unused variable".to_owned(),
            "RESULT: 0 2.00 2048".to_owned(),
            "Command exited with non-zero status 0".to_owned(),
        ];
        let marker = Marker::scan(lines.as_slice()).expect("Present");
        assert_eq!(marker.elapsed, Duration::from_secs(2));
        assert_eq!(marker.peak_memory_kb, 2048);
    }

    #[test]
    fn scan_prefers_last_line() {
        let lines = vec![
            "RESULT: 0 9.99 1".to_owned(),
            "RESULT: 0 1.00 100".to_owned(),
        ];
        let marker = Marker::scan(lines.as_slice()).expect("Present");
        assert_eq!(marker.peak_memory_kb, 100);
    }

    #[test]
    fn scan_without_marker() {
        let lines = vec!["gcc: fatal error".to_owned()];
        assert!(Marker::scan(lines.as_slice()).is_none());
    }
}
