//!
//! The process timer.
//!

pub mod capture;
pub mod error;
pub mod measurement;
pub mod stopwatch;
pub mod wrapper;

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::descriptor::Descriptor;

pub use self::error::Error;
pub use self::measurement::Measurement;
pub use self::stopwatch::StopwatchTimer;
pub use self::wrapper::WrapperTimer;

/// The default pause after a failed trial.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2500);

///
/// A single compiler invocation to measure.
///
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// The compiler configuration.
    pub descriptor: &'a Descriptor,
    /// The source file name, relative to the directory.
    pub source: &'a str,
    /// The working directory of the compiler.
    pub directory: &'a Path,
}

impl<'a> Invocation<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(descriptor: &'a Descriptor, source: &'a str, directory: &'a Path) -> Self {
        Self {
            descriptor,
            source,
            directory,
        }
    }

    ///
    /// Builds the compiler command, optionally prefixed by a wrapper program.
    ///
    pub fn command(&self, wrapper: Option<(&str, &[&str])>) -> Command {
        let mut command = match wrapper {
            Some((program, wrapper_arguments)) => {
                let mut command = Command::new(program);
                command.args(wrapper_arguments);
                command.arg(self.descriptor.executable.as_str());
                command
            }
            None => Command::new(self.descriptor.executable.as_str()),
        };
        command.args(self.descriptor.arguments.iter());
        command.arg(self.source);
        command.current_dir(self.directory);
        command.envs(self.descriptor.environment.iter());
        command
    }
}

///
/// The shared timer settings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// The per-trial deadline.
    pub timeout: Option<Duration>,
    /// The pause after a failed trial.
    pub cooldown: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: None,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(timeout: Option<Duration>, cooldown: Duration) -> Self {
        Self { timeout, cooldown }
    }

    ///
    /// Pauses for the cooldown and returns the per-trial failure.
    ///
    pub fn fail<T>(&self, error: Error) -> Result<T, Error> {
        if !self.cooldown.is_zero() {
            std::thread::sleep(self.cooldown);
        }
        Err(error)
    }
}

///
/// The measurement strategy.
///
pub trait ProcessTimer {
    ///
    /// Runs the compiler once, returning the measurement or the failure.
    ///
    fn measure(&self, invocation: &Invocation) -> Result<Measurement, Error>;

    ///
    /// Whether the strategy reports peak memory.
    ///
    fn measures_memory(&self) -> bool;

    ///
    /// The human-readable strategy description.
    ///
    fn description(&self) -> String;
}

///
/// Chooses the measurement strategy once at start-up.
///
/// The wrapper strategy is used when `wrapper` is set and passes detection,
/// the stopwatch otherwise.
///
pub fn select(wrapper: Option<&str>, settings: Settings) -> Box<dyn ProcessTimer> {
    if let Some(timer) = wrapper.and_then(|wrapper| WrapperTimer::detect(wrapper, settings)) {
        return Box::new(timer);
    }
    Box::new(StopwatchTimer::new(settings))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use crate::descriptor::Descriptor;

    use super::Invocation;

    #[test]
    fn command_layout() {
        let mut environment = BTreeMap::new();
        environment.insert("CC_FLAGS".to_owned(), "none".to_owned());
        let descriptor = Descriptor::new(
            "C".to_owned(),
            "c".to_owned(),
            "gcc".to_owned(),
            vec!["-O2".to_owned()],
            environment,
        )
        .expect("Valid");
        let invocation = Invocation::new(&descriptor, "c.c", Path::new("/tmp/10"));

        let command = invocation.command(Some(("/usr/bin/time", &["-f", "RESULT: %x %e %M"][..])));
        assert_eq!(command.get_program(), "/usr/bin/time");
        let arguments: Vec<&std::ffi::OsStr> = command.get_args().collect();
        assert_eq!(arguments, vec!["-f", "RESULT: %x %e %M", "gcc", "-O2", "c.c"]);
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp/10")));
        assert_eq!(command.get_envs().count(), 1);

        let command = invocation.command(None);
        assert_eq!(command.get_program(), "gcc");
        let arguments: Vec<&std::ffi::OsStr> = command.get_args().collect();
        assert_eq!(arguments, vec!["-O2", "c.c"]);
    }
}
