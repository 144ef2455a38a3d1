//!
//! The benchmark host description.
//!
//! CPU model and memory are read from `/proc` on Linux and degrade to
//! `Unknown` and zero elsewhere.
//!

///
/// The benchmark host description.
///
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Machine {
    /// The operating system name.
    pub os: String,
    /// The CPU architecture.
    pub arch: String,
    /// The CPU model name.
    pub cpu: String,
    /// The number of logical cores.
    pub cores: usize,
    /// The total memory in kilobytes.
    pub memory_kb: u64,
}

impl Machine {
    /// The placeholder for values that cannot be detected.
    pub const UNKNOWN: &'static str = "Unknown";

    ///
    /// Describes the current host.
    ///
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_owned(),
            arch: std::env::consts::ARCH.to_owned(),
            cpu: Self::cpu_model().unwrap_or_else(|| Self::UNKNOWN.to_owned()),
            cores: std::thread::available_parallelism()
                .map(|cores| cores.get())
                .unwrap_or(1),
            memory_kb: Self::total_memory_kb().unwrap_or_default(),
        }
    }

    ///
    /// Reads the CPU model name.
    ///
    fn cpu_model() -> Option<String> {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|model| model.trim().to_owned())
                })
        }
        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }

    ///
    /// Reads the total memory.
    ///
    fn total_memory_kb() -> Option<u64> {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/meminfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("MemTotal:"))
                        .and_then(|line| line.split_whitespace().nth(1))
                        .and_then(|value| value.parse::<u64>().ok())
                })
        }
        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

impl std::fmt::Display for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} ({} cores), {} MB RAM",
            self.os,
            self.arch,
            self.cpu,
            self.cores,
            self.memory_kb / 1024
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Machine;

    #[test]
    fn current_has_platform() {
        let machine = Machine::current();
        assert_eq!(machine.os, std::env::consts::OS);
        assert_eq!(machine.arch, std::env::consts::ARCH);
        assert!(machine.cores >= 1);
        assert!(!machine.cpu.is_empty());
    }
}
