//!
//! The compile-time benchmark report library.
//!

pub mod benchmark;
pub mod matrix;
pub mod output;

pub use crate::benchmark::machine::Machine;
pub use crate::benchmark::metadata::Metadata as BenchmarkMetadata;
pub use crate::benchmark::trial::Trial;
pub use crate::benchmark::Benchmark;
pub use crate::matrix::metric::Metric;
pub use crate::matrix::Matrix;
pub use crate::output::csv::escape as csv_escape;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;

/// The label of the function count column in all tabular outputs.
pub const FUNCTION_COUNT_HEADER: &str = "Number Functions";
