//!
//! Benchmark report output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::benchmark::Benchmark;
use crate::matrix::metric::Metric;
use crate::matrix::Matrix;

use self::csv::Csv;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// The rendered benchmark report.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single Excel workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to a file, creating the parent directories.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Report directory {parent:?} creating: {error}")
            })?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Benchmark, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((benchmark, format): (Benchmark, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Csv => Csv::from(&Matrix::new(&benchmark, Metric::Time)).into(),
            Format::Json => Json::from(benchmark).into(),
            Format::Xlsx => Xlsx::try_from(&benchmark)?.into(),
        })
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}

#[cfg(test)]
mod tests {
    use crate::benchmark::trial::Trial;
    use crate::benchmark::Benchmark;

    use super::format::Format;
    use super::Output;

    #[test]
    fn csv_written_to_nested_path() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let path = directory.path().join("nested").join("report.csv");

        let mut benchmark = Benchmark::default();
        benchmark.push(Trial::passed(
            "gcc".to_owned(),
            "C (gcc [])".to_owned(),
            10,
            0.25,
            None,
        ));
        let output = Output::try_from((benchmark, Format::Csv)).expect("Always valid");
        output.write_to_file(path.as_path()).expect("Writing");

        let content = std::fs::read_to_string(path).expect("Reading");
        assert_eq!(content, "Number Functions, C (gcc [])\n10, 0.250\n");
    }

    #[test]
    fn json_keeps_trials() {
        let mut benchmark = Benchmark::default();
        benchmark.push(Trial::failed(
            "gcc".to_owned(),
            "C (gcc [])".to_owned(),
            10,
        ));
        let output = Output::try_from((benchmark, Format::Json)).expect("Always valid");
        let Output::SingleFile(content) = output else {
            panic!("Expected a text file");
        };
        let parsed: Benchmark = serde_json::from_str(content.as_str()).expect("Valid JSON");
        assert_eq!(parsed.trials.len(), 1);
        assert!(!parsed.trials[0].is_passed());
    }
}
