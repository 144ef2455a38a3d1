//!
//! The function count by compiler matrix.
//!

pub mod metric;

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::benchmark::Benchmark;

use self::metric::Metric;

///
/// A matrix column, that is, one compiler configuration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The identity key.
    pub key: String,
    /// The header label.
    pub label: String,
}

///
/// The function count by compiler matrix.
///
/// Rows are sorted by function count. Columns keep the order in which
/// their first trial appears. Failed, skipped, and absent trials are `None`.
///
#[derive(Debug, Clone)]
pub struct Matrix {
    /// The metric shown in the cells.
    pub metric: Metric,
    /// The columns.
    pub columns: Vec<Column>,
    /// The rows, each holding one cell per column.
    pub rows: BTreeMap<usize, Vec<Option<f64>>>,
}

impl Matrix {
    ///
    /// Pivots the benchmark trials.
    ///
    pub fn new(benchmark: &Benchmark, metric: Metric) -> Self {
        let mut columns: Vec<Column> = Vec::new();
        let mut column_ids: HashMap<&str, usize> = HashMap::new();
        for trial in benchmark.trials.iter() {
            if column_ids.contains_key(trial.key.as_str()) {
                continue;
            }
            column_ids.insert(trial.key.as_str(), columns.len());
            columns.push(Column {
                key: trial.key.clone(),
                label: trial.label.clone(),
            });
        }

        let mut rows: BTreeMap<usize, Vec<Option<f64>>> = BTreeMap::new();
        for trial in benchmark.trials.iter() {
            let row = rows
                .entry(trial.function_count)
                .or_insert_with(|| vec![None; columns.len()]);
            let column_id = column_ids[trial.key.as_str()];
            if row[column_id].is_none() {
                row[column_id] = metric.extract(trial);
            }
        }

        Self {
            metric,
            columns,
            rows,
        }
    }

    ///
    /// Returns the cell value for the specified function count and column key.
    ///
    pub fn get(&self, function_count: usize, key: &str) -> Option<f64> {
        let column_id = self.columns.iter().position(|column| column.key == key)?;
        self.rows
            .get(&function_count)
            .and_then(|row| row[column_id])
    }

    ///
    /// Returns the header labels, starting with the function count column.
    ///
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(crate::FUNCTION_COUNT_HEADER.to_owned());
        header.extend(self.columns.iter().map(|column| column.label.clone()));
        header
    }

    ///
    /// Returns the rendered rows, with failed cells as empty strings.
    ///
    pub fn rendered_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|(function_count, cells)| {
                let mut row = Vec::with_capacity(cells.len() + 1);
                row.push(function_count.to_string());
                row.extend(cells.iter().map(|cell| {
                    cell.map(|value| self.metric.render(value))
                        .unwrap_or_default()
                }));
                row
            })
            .collect()
    }

    ///
    /// Whether the matrix has no rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
