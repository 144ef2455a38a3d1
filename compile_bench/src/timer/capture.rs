//!
//! Running a subprocess while capturing its output.
//!

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

/// The interval between exit checks when a deadline is set.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

///
/// The finished subprocess.
///
#[derive(Debug)]
pub struct Captured {
    /// The exit status, or `None` if the process has been killed at the deadline.
    pub status: Option<ExitStatus>,
    /// The standard output and error lines, in arrival order.
    pub lines: Vec<String>,
    /// The wall-clock time from spawning to exit.
    pub elapsed: Duration,
}

///
/// Runs the command to completion, collecting both output streams line by line.
///
/// Lines of one stream keep their relative order, while the interleaving of
/// the two streams follows arrival at the reader threads.
///
pub fn run(mut command: Command, timeout: Option<Duration>) -> std::io::Result<Captured> {
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let start = Instant::now();
    let mut child = command.spawn()?;
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let lines = Arc::new(Mutex::new(Vec::with_capacity(64)));
    let readers: Vec<JoinHandle<()>> = [
        stdout.map(|stream| spawn_collector(stream, lines.clone())),
        stderr.map(|stream| spawn_collector(stream, lines.clone())),
    ]
    .into_iter()
    .flatten()
    .collect();

    let status = wait(&mut child, timeout)?;
    let elapsed = start.elapsed();

    for reader in readers.into_iter() {
        let _ = reader.join();
    }
    let lines = lines.lock().expect("Sync").clone();

    Ok(Captured {
        status,
        lines,
        elapsed,
    })
}

///
/// Starts a thread collecting the stream lines.
///
fn spawn_collector<R>(stream: R, lines: Arc<Mutex<Vec<String>>>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || collect(stream, lines.as_ref()))
}

///
/// Appends the lines of a stream to the shared buffer.
///
fn collect<R>(stream: R, lines: &Mutex<Vec<String>>)
where
    R: Read,
{
    let mut reader = BufReader::new(stream);
    let mut buffer = Vec::with_capacity(256);
    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(buffer.as_slice())
                    .trim_end_matches(&['\r', '\n'][..])
                    .to_owned();
                lines.lock().expect("Sync").push(line);
            }
        }
    }
}

///
/// Waits for the child, killing it once the deadline passes.
///
fn wait(child: &mut Child, timeout: Option<Duration>) -> std::io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            terminate(child);
            child.wait()?;
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

///
/// Kills the child together with every process it has started.
///
/// The child leads its own process group, so a wrapper and the compiler
/// running under it are killed at once.
///
#[cfg(unix)]
fn terminate(child: &mut Child) {
    let pgid = child.id() as libc::pid_t;
    unsafe {
        libc::killpg(pgid, libc::SIGKILL);
    }
}

///
/// Kills the child.
///
#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
}

#[cfg(all(test, unix))]
mod tests {
    use std::process::Command;
    use std::time::Duration;
    use std::time::Instant;

    use super::run;

    #[test]
    fn both_streams_captured_in_order() {
        let mut command = Command::new("sh");
        command.arg("-c").arg("echo one; echo two; echo three >&2");
        let captured = run(command, None).expect("Spawning");

        assert!(captured.status.expect("Exited").success());
        let stdout: Vec<&String> = captured
            .lines
            .iter()
            .filter(|line| line.as_str() != "three")
            .collect();
        assert_eq!(stdout, vec!["one", "two"]);
        assert!(captured.lines.contains(&"three".to_owned()));
    }

    #[test]
    fn deadline_kills_process() {
        let mut command = Command::new("sh");
        command.arg("-c").arg("exec sleep 5");
        let captured = run(command, Some(Duration::from_millis(100))).expect("Spawning");

        assert!(captured.status.is_none());
        assert!(captured.elapsed < Duration::from_secs(5));
    }

    #[test]
    fn deadline_kills_grandchildren() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let mut command = Command::new("sh");
        command
            .arg("-c")
            .arg("sleep 1; touch late; sleep 4")
            .current_dir(directory.path());

        let start = Instant::now();
        let captured = run(command, Some(Duration::from_millis(100))).expect("Spawning");
        assert!(captured.status.is_none());
        assert!(start.elapsed() < Duration::from_secs(3));

        std::thread::sleep(Duration::from_millis(1500));
        assert!(!directory.path().join("late").exists());
    }

    #[test]
    fn missing_executable_is_spawn_error() {
        let command = Command::new("compile-bench-surely-missing-executable");
        assert!(run(command, None).is_err());
    }
}
