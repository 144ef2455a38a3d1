//!
//! The per-size working directory.
//!

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;

///
/// The files kept when build artifacts are reclaimed.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Retention {
    /// The kept source extensions, without the leading dot.
    extensions: BTreeSet<String>,
    /// The kept file names, such as the result log.
    file_names: BTreeSet<OsString>,
}

impl Retention {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<E, N>(extensions: E, file_names: N) -> Self
    where
        E: IntoIterator<Item = String>,
        N: IntoIterator<Item = OsString>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|extension| extension.trim_start_matches('.').to_owned())
                .collect(),
            file_names: file_names.into_iter().collect(),
        }
    }

    ///
    /// Whether the file is kept.
    ///
    pub fn retains(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name() {
            if self.file_names.contains(name) {
                return true;
            }
        }
        path.extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| self.extensions.contains(extension))
            .unwrap_or(false)
    }
}

///
/// The directory of one program size, living for the duration of its bucket.
///
/// Build artifacts are reclaimed when the guard is dropped, including on an
/// early return.
///
#[derive(Debug)]
pub struct SizeDirectory<'a> {
    /// The directory path.
    path: PathBuf,
    /// The retention filter, or `None` if artifacts are kept.
    retention: Option<&'a Retention>,
}

impl<'a> SizeDirectory<'a> {
    ///
    /// Creates the `<root>/<function_count>` directory if needed.
    ///
    pub fn enter(
        root: &Path,
        function_count: usize,
        retention: Option<&'a Retention>,
    ) -> anyhow::Result<Self> {
        let path = root.join(function_count.to_string());
        std::fs::create_dir_all(path.as_path())
            .with_context(|| format!("Size directory {path:?} creating"))?;
        Ok(Self { path, retention })
    }

    ///
    /// The directory path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Deletes everything not matched by the retention filter.
    ///
    pub fn reclaim(&self) -> anyhow::Result<()> {
        let retention = match self.retention {
            Some(retention) => retention,
            None => return Ok(()),
        };

        let entries = std::fs::read_dir(self.path.as_path())
            .with_context(|| format!("Size directory {:?} reading", self.path))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("Size directory {:?} reading", self.path))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("Artifact {path:?} type checking"))?;
            if file_type.is_dir() {
                std::fs::remove_dir_all(path.as_path())
                    .with_context(|| format!("Artifact directory {path:?} removing"))?;
            } else if !retention.retains(path.as_path()) {
                std::fs::remove_file(path.as_path())
                    .with_context(|| format!("Artifact {path:?} removing"))?;
            }
        }
        Ok(())
    }
}

impl Drop for SizeDirectory<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.reclaim() {
            eprintln!(
                "{} artifacts in {:?} not reclaimed: {error:?}",
                "Warning".bright_yellow().bold(),
                self.path
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::Retention;
    use super::SizeDirectory;

    fn retention() -> Retention {
        Retention::new(
            vec!["c".to_owned(), ".rs".to_owned()],
            vec![OsString::from("compile-times.log.csv")],
        )
    }

    #[test]
    fn enter_creates_directory() {
        let root = tempfile::tempdir().expect("Temporary directory");
        let directory = SizeDirectory::enter(root.path(), 40, None).expect("Creating");
        assert!(directory.path().is_dir());
        assert!(directory.path().ends_with("40"));
    }

    #[test]
    fn reclaim_keeps_sources_and_logs() {
        let root = tempfile::tempdir().expect("Temporary directory");
        let retention = retention();
        let directory = SizeDirectory::enter(root.path(), 10, Some(&retention)).expect("Creating");
        let path = directory.path().to_owned();
        for name in ["c.c", "rust.rs", "a.out", "c.o", "compile-times.log.csv"] {
            std::fs::write(path.join(name), "").expect("Writing");
        }
        std::fs::create_dir_all(path.join("zig-cache").join("o")).expect("Creating");

        directory.reclaim().expect("Reclaiming");

        let mut names: Vec<String> = std::fs::read_dir(path.as_path())
            .expect("Reading")
            .map(|entry| {
                entry
                    .expect("Entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        assert_eq!(names, vec!["c.c", "compile-times.log.csv", "rust.rs"]);
    }

    #[test]
    fn drop_reclaims() {
        let root = tempfile::tempdir().expect("Temporary directory");
        let retention = retention();
        let path = {
            let directory =
                SizeDirectory::enter(root.path(), 10, Some(&retention)).expect("Creating");
            std::fs::write(directory.path().join("a.out"), "").expect("Writing");
            directory.path().to_owned()
        };
        assert!(!path.join("a.out").exists());
    }

    #[test]
    fn no_retention_keeps_everything() {
        let root = tempfile::tempdir().expect("Temporary directory");
        let path = {
            let directory = SizeDirectory::enter(root.path(), 10, None).expect("Creating");
            std::fs::write(directory.path().join("a.out"), "").expect("Writing");
            directory.path().to_owned()
        };
        assert!(path.join("a.out").exists());
    }
}
