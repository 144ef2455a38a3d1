//!
//! The stopwatch measurement strategy.
//!

use super::capture;
use super::Error;
use super::Invocation;
use super::Measurement;
use super::ProcessTimer;
use super::Settings;

///
/// Runs the compiler directly and measures the wall-clock time around it.
///
/// Peak memory is not available with this strategy.
///
#[derive(Debug, Clone)]
pub struct StopwatchTimer {
    /// The shared settings.
    settings: Settings,
}

impl StopwatchTimer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl ProcessTimer for StopwatchTimer {
    fn measure(&self, invocation: &Invocation) -> Result<Measurement, Error> {
        let executable = invocation.descriptor.executable.clone();

        let captured = match capture::run(invocation.command(None), self.settings.timeout) {
            Ok(captured) => captured,
            Err(error) => {
                return self.settings.fail(Error::LaunchFailed {
                    executable,
                    reason: error.to_string(),
                })
            }
        };

        match captured.status {
            None => self.settings.fail(Error::TimedOut {
                executable,
                timeout: self.settings.timeout.unwrap_or_default(),
            }),
            Some(status) if !status.success() => self.settings.fail(Error::CompilationFailed {
                executable,
                exit_code: status.code(),
                output: captured.lines,
            }),
            Some(_) => Ok(Measurement::new(captured.elapsed, None)),
        }
    }

    fn measures_memory(&self) -> bool {
        false
    }

    fn description(&self) -> String {
        "stopwatch".to_owned()
    }
}
