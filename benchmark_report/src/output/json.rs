//!
//! Serializing benchmark data to JSON.
//!

use crate::benchmark::Benchmark;

///
/// Serializing benchmark data to JSON.
///
#[derive(Debug)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl From<Benchmark> for Json {
    fn from(benchmark: Benchmark) -> Self {
        let content = serde_json::to_string_pretty(&benchmark).expect("Always valid");
        Self { content }
    }
}
