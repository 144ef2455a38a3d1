//!
//! The streaming result log.
//!

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use benchmark_report::csv_escape;
use benchmark_report::Metric;
use benchmark_report::FUNCTION_COUNT_HEADER;

use crate::outcome::Outcome;

use super::OutcomeSink;

///
/// Appends one CSV-like line per outcome, flushing after each, so that an
/// interrupted run leaves a readable partial log.
///
#[derive(Debug)]
pub struct ResultLog<W: Write> {
    /// The output stream.
    writer: W,
    /// Whether the memory column is written.
    with_memory: bool,
}

impl ResultLog<BufWriter<File>> {
    ///
    /// Creates or truncates the log file and writes the header.
    ///
    pub fn create(path: &Path, with_memory: bool) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Result log directory {parent:?} creating"))?;
        }
        let file =
            File::create(path).with_context(|| format!("Result log file {path:?} creating"))?;
        Self::new(BufWriter::new(file), with_memory)
    }
}

impl<W: Write> ResultLog<W> {
    ///
    /// Wraps the stream and writes the header.
    ///
    pub fn new(mut writer: W, with_memory: bool) -> anyhow::Result<Self> {
        let mut header = format!("Compiler, {FUNCTION_COUNT_HEADER}, Time (seconds)");
        if with_memory {
            header.push_str(", Memory (KB)");
        }
        writeln!(writer, "{header}").context("Result log header writing")?;
        writer.flush().context("Result log flushing")?;
        Ok(Self {
            writer,
            with_memory,
        })
    }

    ///
    /// Returns the underlying stream.
    ///
    pub fn into_inner(self) -> W {
        self.writer
    }

    ///
    /// Renders one log line without the trailing newline.
    ///
    fn line(&self, outcome: &Outcome) -> String {
        let elapsed = outcome
            .elapsed()
            .map(|elapsed| Metric::Time.render(elapsed.as_secs_f64()))
            .unwrap_or_default();
        let mut line = format!(
            "{}, {}, {}",
            csv_escape(outcome.descriptor.label().as_str()),
            outcome.function_count,
            elapsed
        );
        if self.with_memory {
            let memory = outcome
                .peak_memory_kb()
                .map(|memory| memory.to_string())
                .unwrap_or_default();
            line.push_str(", ");
            line.push_str(memory.as_str());
        }
        line.trim_end().to_owned()
    }
}

impl<W: Write> OutcomeSink for ResultLog<W> {
    fn record(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        let line = self.line(outcome);
        writeln!(self.writer, "{line}").context("Result log writing")?;
        self.writer.flush().context("Result log flushing")?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("Result log flushing")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::descriptor::Descriptor;
    use crate::outcome::Outcome;
    use crate::sink::OutcomeSink;
    use crate::timer::Measurement;

    use super::ResultLog;

    fn descriptor(arguments: &[&str]) -> Arc<Descriptor> {
        Arc::new(
            Descriptor::new(
                "C".to_owned(),
                "c".to_owned(),
                "gcc".to_owned(),
                arguments.iter().map(|argument| argument.to_string()).collect(),
                BTreeMap::new(),
            )
            .expect("Always valid"),
        )
    }

    #[test]
    fn lines_with_memory() {
        let mut log = ResultLog::new(Vec::new(), true).expect("Writing");
        let passed = Outcome::success(
            descriptor(&["-O2"]),
            10,
            Measurement::new(Duration::from_millis(250), Some(4096)),
        )
        .expect("Positive duration");
        log.record(&passed).expect("Writing");
        log.record(&Outcome::skipped(descriptor(&[]), 20, 10))
            .expect("Writing");

        let text = String::from_utf8(log.into_inner()).expect("UTF-8");
        assert_eq!(
            text,
            "Compiler, Number Functions, Time (seconds), Memory (KB)\n\
             C (gcc [-O2]), 10, 0.250, 4096\n\
             C (gcc []), 20,\n"
        );
    }

    #[test]
    fn lines_without_memory() {
        let mut log = ResultLog::new(Vec::new(), false).expect("Writing");
        let passed = Outcome::success(
            descriptor(&["-DX=1,2"]),
            5,
            Measurement::new(Duration::from_secs(2), None),
        )
        .expect("Positive duration");
        log.record(&passed).expect("Writing");

        let text = String::from_utf8(log.into_inner()).expect("UTF-8");
        assert_eq!(
            text,
            "Compiler, Number Functions, Time (seconds)\n\"C (gcc [-DX=1,2])\", 5, 2.000\n"
        );
    }

    #[test]
    fn sub_millisecond_time_is_not_zero() {
        let mut log = ResultLog::new(Vec::new(), false).expect("Writing");
        let passed = Outcome::success(
            descriptor(&[]),
            1,
            Measurement::new(Duration::from_micros(420), None),
        )
        .expect("Positive duration");
        log.record(&passed).expect("Writing");

        let text = String::from_utf8(log.into_inner()).expect("UTF-8");
        assert!(text.ends_with("C (gcc []), 1, 0.0004\n"), "{text}");
    }

    #[test]
    fn file_is_truncated() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let path = directory.path().join("logs").join("times.log.csv");
        std::fs::create_dir_all(path.parent().expect("Parent")).expect("Creating");
        std::fs::write(path.as_path(), "stale\n").expect("Writing");

        let log = ResultLog::create(path.as_path(), false).expect("Creating");
        drop(log);

        let text = std::fs::read_to_string(path.as_path()).expect("Reading");
        assert_eq!(text, "Compiler, Number Functions, Time (seconds)\n");
    }
}
