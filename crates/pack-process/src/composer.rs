//! Composer invocations that materialize the release tree

use std::path::{Path, PathBuf};

use crate::{CommandSpec, ProcessRunner, Result};

/// Materializes and optimizes a dependency-resolved project tree.
pub trait DependencyManager {
    /// Install the project at `version` into the existing, empty `workdir`.
    fn create_project(&self, workdir: &Path, version: &str) -> Result<()>;

    /// Rebuild the optimized, production-only class autoloader in `workdir`.
    fn optimize_autoloader(&self, workdir: &Path) -> Result<()>;
}

/// `php composer.phar` driven through a [`ProcessRunner`].
#[derive(Debug, Clone)]
pub struct Composer {
    php: PathBuf,
    phar: PathBuf,
    package: String,
    runner: ProcessRunner,
}

impl Composer {
    pub fn new(
        php: impl Into<PathBuf>,
        phar: impl Into<PathBuf>,
        package: impl Into<String>,
        runner: ProcessRunner,
    ) -> Self {
        Self {
            php: php.into(),
            phar: phar.into(),
            package: package.into(),
            runner,
        }
    }

    fn base(&self) -> CommandSpec {
        CommandSpec::new(&self.php).arg(self.phar.display().to_string())
    }

    /// `create-project` from source, without dev dependencies, keeping VCS
    /// metadata.
    pub fn create_project_command(&self, workdir: &Path, version: &str) -> CommandSpec {
        self.base()
            .args([
                "create-project",
                "--stability=dev",
                "--prefer-source",
                "--prefer-dist",
                "--no-dev",
                "--no-progress",
                "--no-interaction",
                "--profile",
                "--keep-vcs",
            ])
            .arg(self.package.as_str())
            .arg(workdir.display().to_string())
            .arg(version)
    }

    /// Authoritative, optimized classmap without dev autoloading or scripts.
    pub fn dump_autoload_command(&self) -> CommandSpec {
        self.base().args([
            "dump-autoload",
            "-a",
            "-o",
            "--no-dev",
            "--no-scripts",
            "--no-interaction",
            "--profile",
        ])
    }
}

impl DependencyManager for Composer {
    fn create_project(&self, workdir: &Path, version: &str) -> Result<()> {
        let spec = self.create_project_command(workdir, version);
        self.runner.run(&spec, workdir)?;
        Ok(())
    }

    fn optimize_autoloader(&self, workdir: &Path) -> Result<()> {
        self.runner.run(&self.dump_autoload_command(), workdir)?;
        Ok(())
    }
}
