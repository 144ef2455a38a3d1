//!
//! The trial sequencer.
//!

pub mod failure_set;
pub mod size_directory;
pub mod skip_policy;
pub mod staircase;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use itertools::Itertools;

use crate::descriptor::Descriptor;
use crate::generator::SourceGenerator;
use crate::outcome::Failure;
use crate::outcome::Outcome;
use crate::sink::OutcomeSink;
use crate::timer::Invocation;
use crate::timer::ProcessTimer;

pub use self::failure_set::FailureSet;
pub use self::size_directory::Retention;
pub use self::size_directory::SizeDirectory;
pub use self::skip_policy::SkipPolicy;
pub use self::staircase::Staircase;

///
/// Drives the language by compiler by size trial matrix.
///
/// Trials are run strictly one at a time. Within a language, sizes are visited
/// in ascending order, which the skip policy relies upon.
///
pub struct Sequencer<'a> {
    /// The measurement strategy.
    timer: &'a dyn ProcessTimer,
    /// The source generator.
    generator: &'a dyn SourceGenerator,
    /// The program sizes.
    staircase: Staircase,
    /// The failure skip policy.
    skip_policy: SkipPolicy,
    /// The benchmark root directory.
    root: PathBuf,
    /// The artifact retention filter, or `None` if artifacts are kept.
    retention: Option<Retention>,
    /// The descriptors which have failed so far.
    failures: FailureSet,
}

impl<'a> Sequencer<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        timer: &'a dyn ProcessTimer,
        generator: &'a dyn SourceGenerator,
        staircase: Staircase,
        skip_policy: SkipPolicy,
        root: PathBuf,
        retention: Option<Retention>,
    ) -> Self {
        Self {
            timer,
            generator,
            staircase,
            skip_policy,
            root,
            retention,
            failures: FailureSet::default(),
        }
    }

    ///
    /// The descriptors which have failed so far.
    ///
    pub fn failures(&self) -> &FailureSet {
        &self.failures
    }

    ///
    /// Runs every trial, streaming each outcome into the sink.
    ///
    /// # Errors
    /// If the measurement harness is broken or the working directory cannot
    /// be prepared. The sink is flushed before returning the error, so the
    /// outcomes streamed so far are kept.
    ///
    pub fn run<S>(
        &mut self,
        descriptors: &[Arc<Descriptor>],
        sink: &mut S,
    ) -> anyhow::Result<Vec<Outcome>>
    where
        S: OutcomeSink + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(descriptors.len() * self.staircase.len());
        let result = self.run_inner(descriptors, &mut *sink, &mut outcomes);
        let flushed = sink.flush();
        result?;
        flushed?;
        Ok(outcomes)
    }

    ///
    /// Runs the language groups one after another.
    ///
    fn run_inner<S>(
        &mut self,
        descriptors: &[Arc<Descriptor>],
        sink: &mut S,
        outcomes: &mut Vec<Outcome>,
    ) -> anyhow::Result<()>
    where
        S: OutcomeSink + ?Sized,
    {
        let languages: Vec<&str> = descriptors
            .iter()
            .map(|descriptor| descriptor.language.as_str())
            .unique()
            .collect();

        for language in languages.into_iter() {
            let group: Vec<Arc<Descriptor>> = descriptors
                .iter()
                .filter(|descriptor| descriptor.language == language)
                .cloned()
                .collect();
            let sizes: Vec<usize> = self.staircase.iter().collect();
            for function_count in sizes.into_iter() {
                self.run_size(
                    language,
                    group.as_slice(),
                    function_count,
                    &mut *sink,
                    &mut *outcomes,
                )?;
            }
        }
        Ok(())
    }

    ///
    /// Runs all compilers of one language at one program size.
    ///
    fn run_size<S>(
        &mut self,
        language: &str,
        group: &[Arc<Descriptor>],
        function_count: usize,
        sink: &mut S,
        outcomes: &mut Vec<Outcome>,
    ) -> anyhow::Result<()>
    where
        S: OutcomeSink + ?Sized,
    {
        let directory =
            SizeDirectory::enter(self.root.as_path(), function_count, self.retention.as_ref())?;
        let mut generated = BTreeSet::new();

        for descriptor in group.iter() {
            let skipped_since = if self.skip_policy.skips(self.failures.contains(descriptor)) {
                self.failures.first_failure(descriptor)
            } else {
                None
            };
            let outcome = match skipped_since {
                Some(since) => Outcome::skipped(descriptor.clone(), function_count, since),
                None => {
                    let source = descriptor.source_file_name();
                    let path = directory.path().join(source.as_str());
                    if generated.insert(source.clone()) && !path.exists() {
                        self.generator
                            .generate(language, function_count, path.as_path())
                            .with_context(|| {
                                format!("{language} source generating at {function_count} functions")
                            })?;
                    }

                    let invocation = Invocation::new(descriptor, source.as_str(), directory.path());
                    match self.timer.measure(&invocation) {
                        Ok(measurement) => {
                            Outcome::success(descriptor.clone(), function_count, measurement)?
                        }
                        Err(error) => {
                            let failure = Failure::try_from(error)?;
                            self.failures.insert(descriptor.clone(), function_count);
                            Outcome::failure(descriptor.clone(), function_count, failure)
                        }
                    }
                }
            };

            sink.record(&outcome)?;
            outcomes.push(outcome);
            directory.reclaim()?;
        }
        Ok(())
    }
}
