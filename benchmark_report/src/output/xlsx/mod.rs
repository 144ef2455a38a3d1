//!
//! XLSX output format for benchmark data.
//!

pub mod worksheet;

use crate::benchmark::Benchmark;
use crate::matrix::metric::Metric;
use crate::matrix::Matrix;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark data.
///
pub struct Xlsx {
    /// Worksheet for elapsed time measurements.
    pub time_worksheet: Worksheet,
    /// Worksheet for peak memory measurements, if any were taken.
    pub memory_worksheet: Option<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.time_worksheet.into_inner());
        if let Some(memory_worksheet) = self.memory_worksheet {
            workbook.push_worksheet(memory_worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&Benchmark> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(benchmark: &Benchmark) -> Result<Self, Self::Error> {
        let time_worksheet = Worksheet::try_from(&Matrix::new(benchmark, Metric::Time))?;
        let memory_worksheet = if benchmark.has_memory() {
            Some(Worksheet::try_from(&Matrix::new(benchmark, Metric::Memory))?)
        } else {
            None
        };

        Ok(Self {
            time_worksheet,
            memory_worksheet,
        })
    }
}
