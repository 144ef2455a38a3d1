//!
//! Output report format.
//!

///
/// Output report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The function count by compiler matrix of elapsed seconds.
    #[default]
    Csv,
    /// The whole benchmark data model.
    Json,
    /// Excel spreadsheet with time and memory worksheets.
    Xlsx,
}

impl Format {
    ///
    /// Returns the conventional file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                [Self::Csv, Self::Json, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Format;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Format::from_str("XLSX").expect("Valid"), Format::Xlsx);
        assert_eq!(Format::from_str("csv").expect("Valid"), Format::Csv);
    }

    #[test]
    fn parse_unknown() {
        let error = Format::from_str("yaml").expect_err("Invalid");
        assert!(error.to_string().contains("csv, json, xlsx"));
    }
}
