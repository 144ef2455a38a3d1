//!
//! The compile-time benchmark arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The compile-time benchmark arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints successful trials and the output of failed compilers.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The compiler list config, in JSON or YAML format.
    #[arg(short, long, default_value = "./configs/compilers.json")]
    pub config: PathBuf,

    /// The number of functions in the smallest generated program.
    #[arg(long, default_value_t = 1000)]
    pub start_size: usize,

    /// The number of program sizes.
    #[arg(long, default_value_t = 10)]
    pub step_count: usize,

    /// The number of functions added at each step.
    #[arg(long, default_value_t = 1000)]
    pub size_increment: usize,

    /// Runs only languages whose name contains any string from the specified ones.
    #[arg(short, long)]
    pub language: Vec<String>,

    /// Runs only compilers whose executable contains any string from the specified ones.
    #[arg(long)]
    pub compiler: Vec<String>,

    /// The benchmark directory with one subdirectory per program size.
    #[arg(short, long, default_value = "./benchmark")]
    pub root: PathBuf,

    /// The report output path.
    /// Is set to `<root>/compile-times.<format>` by default.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// The report output format: `csv`, `json`, or `xlsx`.
    #[arg(long, default_value_t = benchmark_report::OutputFormat::Csv)]
    pub output_format: benchmark_report::OutputFormat,

    /// The streaming result log path.
    /// Is set to `<root>/compile-times.log.csv` by default.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// The time-measuring wrapper, as a path or a name looked up in `PATH`.
    /// Is set to `time` by default.
    #[arg(long)]
    pub wrapper: Option<String>,

    /// Measures the wall-clock time only, without the wrapper.
    #[arg(long)]
    pub stopwatch: bool,

    /// Kills a compiler running longer than the specified number of seconds.
    #[arg(long)]
    pub timeout: Option<f64>,

    /// The pause after a failed trial, in milliseconds.
    #[arg(long, default_value_t = 2500)]
    pub cooldown_ms: u64,

    /// Runs failed compilers again at larger sizes instead of skipping them.
    #[arg(long)]
    pub retry_failed: bool,

    /// Keeps the build artifacts in the size directories.
    #[arg(long)]
    pub keep_artifacts: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.step_count == 0 {
            anyhow::bail!("The step count must be at least 1.");
        }
        if arguments.step_count > 1 && arguments.size_increment == 0 {
            anyhow::bail!("The size increment must be positive when benchmarking more than one size.");
        }
        if let Some(timeout) = arguments.timeout {
            if !timeout.is_finite() || timeout <= 0.0 {
                anyhow::bail!("The timeout must be a positive number of seconds, found `{timeout}`.");
            }
        }
        if arguments.stopwatch && arguments.wrapper.is_some() {
            anyhow::bail!("The `--wrapper` and `--stopwatch` options are mutually exclusive.");
        }

        Ok(arguments)
    }
}
