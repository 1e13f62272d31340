//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pack_rules::ROLLING_TAG;

/// Release Packager - Build a stripped-down, distributable release archive
#[derive(Parser, Debug)]
#[command(name = "pack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build a release archive
    ///
    /// Installs the project with composer into a fresh working directory,
    /// prunes it with the rules from resources/rule.<tag>.json (falling back
    /// to resources/rule.master.json), and zips it to build/build-<tag>.zip.
    ///
    /// Examples:
    ///   pack build              # Package the rolling master branch
    ///   pack build v2.4.0       # Package a tagged release
    ///   pack build --root /srv/packager --timeout 1200
    Build {
        /// Branch or tag to package
        #[arg(default_value = ROLLING_TAG)]
        tag: String,

        /// Packager root holding composer.phar, resources/ and build/
        #[arg(long, env = "PACK_ROOT", default_value = ".")]
        root: PathBuf,

        /// Timeout in seconds for each external process
        #[arg(long)]
        timeout: Option<u64>,

        /// Composer package to materialize
        #[arg(long)]
        package: Option<String>,
    },
}
