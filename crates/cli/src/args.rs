//! Command-line arguments.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use std::path::PathBuf;

/// Derive the web UI version from the release version file and hand it to the
/// frontend bundler.
#[derive(Debug, Parser)]
#[command(name = "verstamp", version, about)]
pub struct Cli {
    /// Web UI project root (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file to use instead of `<root>/verstamp.toml`.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject version file lines without '='.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the derived version.
    Version {
        /// Print the release tag form (`v1.2.3`).
        #[arg(long)]
        tag: bool,
    },

    /// Print the environment the bundler runs with.
    Env {
        #[arg(long, value_enum, default_value_t = EnvFormat::Dotenv)]
        format: EnvFormat,
    },

    /// Print the resolved build plan as JSON.
    Plan,

    /// Resolve the build plan and run the bundler.
    Build,

    /// Write a verstamp.toml into the project root.
    Init {
        /// Overwrite an existing verstamp.toml.
        #[arg(long)]
        force: bool,

        /// Also write a starter version file if none exists.
        #[arg(long)]
        seed_version: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EnvFormat {
    /// `NAME=value`
    Dotenv,
    /// `export NAME='value'`
    Shell,
    Json,
}
