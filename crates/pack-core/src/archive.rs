//! Archive creation

use std::path::PathBuf;

use pack_fs::NormalizedPath;
use pack_process::{CommandSpec, ProcessRunner};

/// Compresses a finished working tree into a single archive.
pub trait Archiver {
    /// Archive `source` into `destination`, which does not exist yet.
    fn archive(
        &self,
        source: &NormalizedPath,
        destination: &NormalizedPath,
    ) -> pack_process::Result<()>;
}

/// The `zip` command-line tool.
///
/// Runs from the parent of the source directory so the archive holds the
/// working directory as its single top-level entry.
#[derive(Debug, Clone)]
pub struct ZipArchiver {
    program: PathBuf,
    runner: ProcessRunner,
}

impl ZipArchiver {
    pub fn new(program: impl Into<PathBuf>, runner: ProcessRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// The invocation and the directory it runs in.
    pub fn command(
        &self,
        source: &NormalizedPath,
        destination: &NormalizedPath,
    ) -> (CommandSpec, NormalizedPath) {
        let (cwd, entry) = match (source.parent(), source.file_name()) {
            (Some(parent), Some(name)) => (parent, name.to_string()),
            _ => (source.clone(), ".".to_string()),
        };

        let spec = CommandSpec::new(&self.program)
            .args(["-r", "-q"])
            .arg(destination.as_str())
            .arg(entry);
        (spec, cwd)
    }
}

impl Archiver for ZipArchiver {
    fn archive(
        &self,
        source: &NormalizedPath,
        destination: &NormalizedPath,
    ) -> pack_process::Result<()> {
        let (spec, cwd) = self.command(source, destination);
        self.runner.run(&spec, &cwd.to_native())?;
        Ok(())
    }
}
