//!
//! The trial sequencer tests.
//!

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::descriptor::Descriptor;
use crate::generator::SourceGenerator;
use crate::outcome::Failure;
use crate::outcome::Outcome;
use crate::outcome::Status;
use crate::timer::Error;
use crate::timer::Invocation;
use crate::timer::Measurement;
use crate::timer::ProcessTimer;

use super::FailureSet;
use super::Retention;
use super::Sequencer;
use super::SkipPolicy;
use super::Staircase;

///
/// A timer failing each executable from a given size on.
///
#[derive(Default)]
struct FakeTimer {
    /// The first failing size per executable.
    fails_from: HashMap<String, usize>,
    /// The executable and size producing no result line.
    violation: Option<(String, usize)>,
    /// The recorded calls.
    calls: RefCell<Vec<(String, usize)>>,
}

impl FakeTimer {
    fn failing(executable: &str, from: usize) -> Self {
        let mut timer = Self::default();
        timer.fails_from.insert(executable.to_owned(), from);
        timer
    }

    fn calls(&self) -> Vec<(String, usize)> {
        self.calls.borrow().clone()
    }
}

impl ProcessTimer for FakeTimer {
    fn measure(&self, invocation: &Invocation) -> Result<Measurement, Error> {
        let executable = invocation.descriptor.executable.clone();
        let size: usize = invocation
            .directory
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.parse().ok())
            .expect("Size directory");
        assert!(
            invocation.directory.join(invocation.source).exists(),
            "Source must be generated before the trial"
        );
        self.calls.borrow_mut().push((executable.clone(), size));

        if self.violation == Some((executable.clone(), size)) {
            return Err(Error::ProtocolViolation {
                wrapper: "fake".to_owned(),
                executable,
                output: vec![],
            });
        }
        match self.fails_from.get(executable.as_str()) {
            Some(from) if size >= *from => Err(Error::CompilationFailed {
                executable,
                exit_code: Some(1),
                output: vec!["error: too many functions".to_owned()],
            }),
            _ => Ok(Measurement::new(
                Duration::from_millis(size as u64),
                Some(size as u64 * 10),
            )),
        }
    }

    fn measures_memory(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "fake".to_owned()
    }
}

///
/// A generator writing placeholder files.
///
#[derive(Default)]
struct FakeGenerator {
    /// The recorded calls.
    calls: RefCell<Vec<(String, usize)>>,
}

impl SourceGenerator for FakeGenerator {
    fn supports(&self, _language: &str) -> bool {
        true
    }

    fn generate(&self, language: &str, function_count: usize, path: &Path) -> anyhow::Result<()> {
        self.calls
            .borrow_mut()
            .push((language.to_owned(), function_count));
        if !path.exists() {
            std::fs::write(path, format!("{language} {function_count}\n"))?;
        }
        Ok(())
    }
}

fn descriptor(language: &str, executable: &str) -> Arc<Descriptor> {
    Arc::new(
        Descriptor::new(
            language.to_owned(),
            language.to_lowercase(),
            executable.to_owned(),
            vec![],
            BTreeMap::new(),
        )
        .expect("Always valid"),
    )
}

fn run(
    timer: &FakeTimer,
    generator: &FakeGenerator,
    root: &Path,
    skip_policy: SkipPolicy,
    descriptors: &[Arc<Descriptor>],
) -> (anyhow::Result<Vec<Outcome>>, Vec<Outcome>, FailureSet) {
    let staircase = Staircase::new(10, 3, 10).expect("Valid");
    let mut sequencer = Sequencer::new(
        timer,
        generator,
        staircase,
        skip_policy,
        root.to_owned(),
        None,
    );
    let mut streamed = Vec::new();
    let result = sequencer.run(descriptors, &mut streamed);
    (result, streamed, sequencer.failures().clone())
}

#[test]
fn failed_descriptor_never_reinvoked_at_larger_sizes() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer::failing("a", 10);
    let generator = FakeGenerator::default();
    let descriptors = vec![descriptor("C", "a"), descriptor("C", "b")];

    let (result, _, failures) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Monotonic,
        descriptors.as_slice(),
    );
    let outcomes = result.expect("Run");

    let calls = timer.calls();
    assert_eq!(
        calls,
        vec![
            ("a".to_owned(), 10),
            ("b".to_owned(), 10),
            ("b".to_owned(), 20),
            ("b".to_owned(), 30),
        ]
    );
    assert_eq!(outcomes.len(), 6);

    let a: Vec<&Outcome> = outcomes
        .iter()
        .filter(|outcome| outcome.descriptor.executable == "a")
        .collect();
    assert!(matches!(
        a[0].status,
        Status::Failed(Failure::CompilationFailed { .. })
    ));
    for outcome in a[1..].iter() {
        assert_eq!(outcome.status, Status::Failed(Failure::Skipped { since: 10 }));
    }

    assert_eq!(failures.len(), 1);
    assert_eq!(failures.first_failure(&descriptors[0]), Some(10));
    assert!(!failures.contains(&descriptors[1]));
}

#[test]
fn never_policy_retries() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer::failing("a", 20);
    let generator = FakeGenerator::default();
    let descriptors = vec![descriptor("C", "a")];

    let (result, _, failures) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Never,
        descriptors.as_slice(),
    );
    let outcomes = result.expect("Run");

    assert_eq!(timer.calls().len(), 3);
    assert_eq!(failures.first_failure(&descriptors[0]), Some(20));
    assert!(outcomes[0].succeeded());
    assert!(!outcomes[1].succeeded());
    assert!(matches!(
        outcomes[2].status,
        Status::Failed(Failure::CompilationFailed { .. })
    ));
}

#[test]
fn source_generated_once_per_language_and_size() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer::default();
    let generator = FakeGenerator::default();
    let descriptors = vec![
        descriptor("C", "gcc"),
        descriptor("Go", "go"),
        descriptor("C", "clang"),
    ];

    let (result, _, failures) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Monotonic,
        descriptors.as_slice(),
    );
    result.expect("Run");
    assert!(failures.is_empty());

    assert_eq!(
        generator.calls.borrow().clone(),
        vec![
            ("C".to_owned(), 10),
            ("C".to_owned(), 20),
            ("C".to_owned(), 30),
            ("Go".to_owned(), 10),
            ("Go".to_owned(), 20),
            ("Go".to_owned(), 30),
        ]
    );
    assert!(root.path().join("20").join("c.c").exists());
    assert!(root.path().join("30").join("go.go").exists());
}

#[test]
fn existing_source_reused() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let directory = root.path().join("10");
    std::fs::create_dir_all(directory.as_path()).expect("Creating");
    std::fs::write(directory.join("c.c"), "cached\n").expect("Writing");

    let timer = FakeTimer::default();
    let generator = FakeGenerator::default();
    let descriptors = vec![descriptor("C", "gcc")];
    let (result, _, _) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Monotonic,
        descriptors.as_slice(),
    );
    result.expect("Run");

    assert!(!generator.calls.borrow().contains(&("C".to_owned(), 10)));
    assert_eq!(
        std::fs::read_to_string(directory.join("c.c")).expect("Reading"),
        "cached\n"
    );
}

#[test]
fn sizes_visited_in_ascending_order_per_language() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer::default();
    let generator = FakeGenerator::default();
    let descriptors = vec![descriptor("Go", "go"), descriptor("C", "gcc")];

    let (result, streamed, _) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Monotonic,
        descriptors.as_slice(),
    );
    let outcomes = result.expect("Run");

    let order: Vec<(String, usize)> = outcomes
        .iter()
        .map(|outcome| (outcome.descriptor.language.clone(), outcome.function_count))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Go".to_owned(), 10),
            ("Go".to_owned(), 20),
            ("Go".to_owned(), 30),
            ("C".to_owned(), 10),
            ("C".to_owned(), 20),
            ("C".to_owned(), 30),
        ]
    );
    assert_eq!(streamed, outcomes);
}

#[test]
fn protocol_violation_aborts_run() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer {
        violation: Some(("gcc".to_owned(), 20)),
        ..FakeTimer::default()
    };
    let generator = FakeGenerator::default();
    let descriptors = vec![descriptor("C", "gcc"), descriptor("C", "clang")];

    let (result, streamed, _) = run(
        &timer,
        &generator,
        root.path(),
        SkipPolicy::Monotonic,
        descriptors.as_slice(),
    );

    let error = result.expect_err("Fatal");
    assert!(error.downcast_ref::<Error>().is_some());
    assert_eq!(streamed.len(), 2);
    assert_eq!(timer.calls().last(), Some(&("gcc".to_owned(), 20)));
}

#[test]
fn artifacts_reclaimed_after_each_trial() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let timer = FakeTimer::default();
    let generator = FakeGenerator::default();
    let staircase = Staircase::new(10, 1, 0).expect("Valid");
    let retention = Retention::new(vec!["c".to_owned()], vec![]);
    let mut sequencer = Sequencer::new(
        &timer,
        &generator,
        staircase,
        SkipPolicy::Monotonic,
        root.path().to_owned(),
        Some(retention),
    );

    std::fs::create_dir_all(root.path().join("10")).expect("Creating");
    std::fs::write(root.path().join("10").join("a.out"), "").expect("Writing");
    let mut streamed = Vec::new();
    sequencer
        .run(&[descriptor("C", "gcc")], &mut streamed)
        .expect("Run");

    assert!(root.path().join("10").join("c.c").exists());
    assert!(!root.path().join("10").join("a.out").exists());
}
