//!
//! Serializing the benchmark matrix to CSV.
//!

use std::fmt::Write;

use crate::matrix::Matrix;

/// The field separator.
pub const SEPARATOR: &str = ", ";

///
/// Serializes the matrix to CSV in the following format:
/// "Number Functions", "<compiler 1>", "<compiler 2>", ...
///
/// Cells of failed or absent trials are left empty.
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl From<&Matrix> for Csv {
    fn from(matrix: &Matrix) -> Self {
        let mut content =
            String::with_capacity((matrix.rows.len() + 1) * 16 * (matrix.columns.len() + 1));
        Self::write_line(&mut content, matrix.header());
        for row in matrix.rendered_rows().into_iter() {
            Self::write_line(&mut content, row);
        }
        Self { content }
    }
}

impl Csv {
    ///
    /// Writes a single line, escaping the fields.
    ///
    fn write_line(content: &mut String, fields: Vec<String>) {
        let line = fields
            .iter()
            .map(|field| escape(field.as_str()))
            .collect::<Vec<String>>()
            .join(SEPARATOR);
        writeln!(content, "{}", line.trim_end()).expect("Always valid");
    }
}

///
/// Quotes a field containing CSV special characters.
///
pub fn escape(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::benchmark::trial::Trial;
    use crate::benchmark::Benchmark;
    use crate::matrix::metric::Metric;
    use crate::matrix::Matrix;

    use super::escape;
    use super::Csv;

    #[test]
    fn escape_plain() {
        assert_eq!(escape("C (gcc [-O2])"), "C (gcc [-O2])");
    }

    #[test]
    fn escape_comma_and_quote() {
        assert_eq!(escape(r#"a, "b""#), r#""a, ""b""""#);
    }

    #[test]
    fn matrix_with_gaps() {
        let mut benchmark = Benchmark::default();
        benchmark.push(Trial::failed("a".to_owned(), "C (gcc [])".to_owned(), 10));
        benchmark.push(Trial::passed(
            "b".to_owned(),
            "C (clang [-O1])".to_owned(),
            10,
            1.5,
            None,
        ));
        benchmark.push(Trial::passed(
            "a".to_owned(),
            "C (gcc [])".to_owned(),
            20,
            2.0,
            None,
        ));
        benchmark.push(Trial::failed(
            "b".to_owned(),
            "C (clang [-O1])".to_owned(),
            20,
        ));

        let csv = Csv::from(&Matrix::new(&benchmark, Metric::Time));
        assert_eq!(
            csv.content,
            "Number Functions, C (gcc []), C (clang [-O1])\n10, , 1.500\n20, 2.000,\n"
        );
    }
}
