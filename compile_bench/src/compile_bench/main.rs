//!
//! The compile-time benchmark executable.
//!

pub(crate) mod arguments;

use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use itertools::Itertools;

use compile_bench::Descriptor;
use compile_bench::SourceGenerator;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

/// The default wrapper looked up in `PATH`.
const DEFAULT_WRAPPER: &str = "time";

/// The default report file stem inside the benchmark root.
const DEFAULT_REPORT_STEM: &str = "compile-times";

/// The default streaming log file name inside the benchmark root.
const DEFAULT_LOG_FILE_NAME: &str = "compile-times.log.csv";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let quiet = arguments.quiet;
    if !quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let descriptors = compile_bench::Config::read(arguments.config.as_path())?.into_descriptors()?;
    if !quiet {
        for duplicate in descriptors.duplicates.iter() {
            eprintln!(
                "{} duplicate compiler `{}` is ignored",
                "Warning".bright_yellow().bold(),
                duplicate.label(),
            );
        }
    }
    let filters = compile_bench::Filters::new(arguments.language, arguments.compiler);
    let descriptors: Vec<Arc<Descriptor>> = descriptors
        .unique
        .into_iter()
        .filter(|descriptor| filters.check(descriptor))
        .collect();
    if descriptors.is_empty() {
        anyhow::bail!(
            "No compilers from {:?} match the filters",
            arguments.config
        );
    }

    let generator = compile_bench::ProgramGenerator;
    if let Some(descriptor) = descriptors
        .iter()
        .find(|descriptor| !generator.supports(descriptor.language.as_str()))
    {
        anyhow::bail!(
            "Language `{}` of `{}` is not supported. Supported languages: {}",
            descriptor.language,
            descriptor.label(),
            program_generator::Language::ALL
                .iter()
                .map(|language| language.to_string())
                .join(", "),
        );
    }

    let settings = compile_bench::TimerSettings::new(
        arguments.timeout.map(Duration::from_secs_f64),
        Duration::from_millis(arguments.cooldown_ms),
    );
    let wrapper = if arguments.stopwatch {
        None
    } else {
        Some(arguments.wrapper.as_deref().unwrap_or(DEFAULT_WRAPPER))
    };
    let timer = compile_bench::timer::select(wrapper, settings);
    if !arguments.stopwatch && !timer.measures_memory() && !quiet {
        eprintln!(
            "{} wrapper `{}` is unavailable, peak memory is not measured",
            "Warning".bright_yellow().bold(),
            wrapper.unwrap_or(DEFAULT_WRAPPER),
        );
    }

    let machine = benchmark_report::Machine::current();
    if !quiet {
        println!("     {} {}", "Machine".bright_green().bold(), machine);
        println!(
            "     {} {}",
            "Measure".bright_green().bold(),
            timer.description()
        );
    }

    std::fs::create_dir_all(arguments.root.as_path()).map_err(|error| {
        anyhow::anyhow!(
            "Benchmark directory {:?} creating error: {}",
            arguments.root,
            error
        )
    })?;
    let log_path = arguments
        .log_path
        .unwrap_or_else(|| arguments.root.join(DEFAULT_LOG_FILE_NAME));
    let output_path = arguments.output_path.unwrap_or_else(|| {
        arguments.root.join(format!(
            "{DEFAULT_REPORT_STEM}.{}",
            arguments.output_format.extension()
        ))
    });

    let retention = if arguments.keep_artifacts {
        None
    } else {
        let extensions = descriptors
            .iter()
            .map(|descriptor| descriptor.extension.clone())
            .unique()
            .collect::<Vec<String>>();
        let file_names = [log_path.as_path(), output_path.as_path()]
            .into_iter()
            .filter_map(|path| path.file_name())
            .map(OsString::from)
            .collect::<Vec<OsString>>();
        Some(compile_bench::Retention::new(extensions, file_names))
    };
    let staircase = compile_bench::Staircase::new(
        arguments.start_size,
        arguments.step_count,
        arguments.size_increment,
    )?;
    let skip_policy = if arguments.retry_failed {
        compile_bench::SkipPolicy::Never
    } else {
        compile_bench::SkipPolicy::Monotonic
    };
    if !quiet {
        println!(
            "     {} {} compilers at {} sizes, {}",
            "Running".bright_green().bold(),
            descriptors.len(),
            staircase.len(),
            skip_policy,
        );
    }

    let mut metadata = benchmark_report::BenchmarkMetadata::start(machine, timer.description());
    let mut log = compile_bench::ResultLog::create(log_path.as_path(), timer.measures_memory())?;
    let mut summary = compile_bench::Summary::new(arguments.verbose, quiet);

    let run_time_start = Instant::now();
    let mut sequencer = compile_bench::Sequencer::new(
        timer.as_ref(),
        &generator,
        staircase,
        skip_policy,
        arguments.root.clone(),
        retention,
    );
    let outcomes = sequencer.run(descriptors.as_slice(), &mut (&mut log, &mut summary))?;
    metadata.finish();

    let mut benchmark = benchmark_report::Benchmark::new(metadata);
    for outcome in outcomes.iter() {
        benchmark.push(benchmark_report::Trial::from(outcome));
    }
    let output: benchmark_report::Output = (benchmark, arguments.output_format).try_into()?;
    output.write_to_file(output_path.as_path())?;

    print!("{summary}");
    if !quiet {
        println!(
            "    {} benchmarking in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
        println!(
            "     {} report {:?}, log {:?}",
            "Written".bright_green().bold(),
            output_path,
            log_path,
        );
    }

    Ok(())
}
