//!
//! The wrapper measurement strategy.
//!

pub mod marker;

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use super::capture;
use super::Error;
use super::Invocation;
use super::Measurement;
use super::ProcessTimer;
use super::Settings;

use self::marker::Marker;

/// The inner exit codes reported when the command cannot be executed or found.
const LAUNCH_FAILURE_CODES: [i32; 2] = [126, 127];

/// The deadline of the capability detection run.
const DETECTION_TIMEOUT: Duration = Duration::from_secs(10);

///
/// Runs the compiler under a time-measuring wrapper, such as GNU `time`.
///
#[derive(Debug, Clone)]
pub struct WrapperTimer {
    /// The resolved wrapper executable.
    path: PathBuf,
    /// The shared settings.
    settings: Settings,
}

impl WrapperTimer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, settings: Settings) -> Self {
        Self { path, settings }
    }

    ///
    /// Checks whether the wrapper is usable on this host.
    ///
    /// Returns `None` on non-Unix hosts, if the wrapper cannot be resolved,
    /// or if a trial run does not print a parseable result line.
    ///
    pub fn detect(wrapper: &str, settings: Settings) -> Option<Self> {
        if !cfg!(unix) {
            return None;
        }
        let path = which::which(wrapper).ok()?;

        let mut command = Command::new(path.as_path());
        command.arg("-f").arg(marker::FORMAT).arg("true");
        let captured = capture::run(command, Some(DETECTION_TIMEOUT)).ok()?;
        let marker = Marker::scan(captured.lines.as_slice())?;
        if !marker.is_success() {
            return None;
        }

        Some(Self::new(path, settings))
    }

    ///
    /// The wrapper as it is reported in errors.
    ///
    fn name(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    ///
    /// Classifies a non-zero inner exit code.
    ///
    fn failure(executable: String, exit_code: i32, output: Vec<String>) -> Error {
        if LAUNCH_FAILURE_CODES.contains(&exit_code) {
            Error::LaunchFailed {
                executable,
                reason: output
                    .last()
                    .cloned()
                    .unwrap_or_else(|| format!("exit code {exit_code}")),
            }
        } else {
            Error::CompilationFailed {
                executable,
                exit_code: Some(exit_code),
                output,
            }
        }
    }
}

impl ProcessTimer for WrapperTimer {
    fn measure(&self, invocation: &Invocation) -> Result<Measurement, Error> {
        let executable = invocation.descriptor.executable.clone();

        let path = self.path.to_string_lossy();
        let command = invocation.command(Some((path.as_ref(), &["-f", marker::FORMAT][..])));
        let captured = match capture::run(command, self.settings.timeout) {
            Ok(captured) => captured,
            Err(error) => {
                return self.settings.fail(Error::LaunchFailed {
                    executable: self.name(),
                    reason: error.to_string(),
                })
            }
        };

        let status = match captured.status {
            Some(status) => status,
            None => {
                return self.settings.fail(Error::TimedOut {
                    executable,
                    timeout: self.settings.timeout.unwrap_or_default(),
                })
            }
        };
        let marker = Marker::scan(captured.lines.as_slice());

        // The wrapper forwards the inner exit code as its own.
        if !status.success() {
            let error = match marker {
                Some(marker) if !marker.is_success() => {
                    Self::failure(executable, marker.exit_code, captured.lines)
                }
                _ => Error::LaunchFailed {
                    executable: self.name(),
                    reason: format!(
                        "exited with code {}",
                        status
                            .code()
                            .map(|code| code.to_string())
                            .unwrap_or_else(|| "<signal>".to_owned())
                    ),
                },
            };
            return self.settings.fail(error);
        }

        let marker = match marker {
            Some(marker) => marker,
            None => {
                return Err(Error::ProtocolViolation {
                    wrapper: self.name(),
                    executable,
                    output: captured.lines,
                })
            }
        };
        if !marker.is_success() {
            return self
                .settings
                .fail(Self::failure(executable, marker.exit_code, captured.lines));
        }

        let elapsed = if marker.elapsed.is_zero() {
            captured.elapsed
        } else {
            marker.elapsed
        };
        Ok(Measurement::new(elapsed, Some(marker.peak_memory_kb)))
    }

    fn measures_memory(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        format!("wrapper `{}`", self.path.to_string_lossy())
    }
}
