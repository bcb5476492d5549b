pub mod env;
pub mod locate;
pub mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ino_core::{EnvironmentConfig, ResourceEnvironment};

use report::ConsoleReporter;

#[derive(Parser)]
#[command(
    name = "ino",
    about = "Locate Arduino toolchains, directories, and data files",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub env: EnvOptions,
    #[command(subcommand)]
    pub command: Commands,
}

/// Explicit entries; these shadow configured defaults.
#[derive(Args)]
pub struct EnvOptions {
    /// Build directory, created if missing
    #[arg(long = "build-dir", global = true)]
    pub build_dir: Option<String>,
    /// Arduino distribution root, searched before the built-in guesses
    #[arg(long = "arduino-dist", global = true)]
    pub arduino_dist: Option<String>,
    /// Set an environment entry (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_entry, global = true)]
    pub entries: Vec<(String, String)>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find an executable (searches $PATH unless --place is given)
    Tool {
        /// Cache key
        key: String,
        /// File names to try (defaults to the key)
        items: Vec<String>,
        /// Directory or path list to search; may reference $VARIABLES
        #[arg(long = "place")]
        places: Vec<String>,
        /// Name shown in progress output
        #[arg(long)]
        name: Option<String>,
    },
    /// Find a file and print its full path
    File {
        key: String,
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long = "place", required = true)]
        places: Vec<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Find the directory that contains one of the items
    Dir {
        key: String,
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long = "place", required = true)]
        places: Vec<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Find a directory inside the Arduino distribution
    ArduinoDir {
        key: String,
        #[arg(required = true)]
        items: Vec<String>,
        /// Path below the distribution root, e.g. hardware/arduino/cores
        #[arg(long, value_delimiter = '/')]
        subpath: Vec<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Find a file named KEY inside the Arduino distribution
    ArduinoFile {
        key: String,
        #[arg(long, value_delimiter = '/')]
        subpath: Vec<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Find a tool bundled with the Arduino distribution
    ArduinoTool {
        key: String,
        #[arg(long, value_delimiter = '/')]
        subpath: Vec<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the distribution directories searched for a subpath
    Places {
        /// Path components below the distribution root
        parts: Vec<String>,
    },
    /// Show resolved settings and explicit entries
    Env {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_entry(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Build the environment for this invocation: `INO_*` defaults, then the
/// explicit entries from the command line.
pub fn open_environment(options: &EnvOptions) -> Result<ResourceEnvironment> {
    let mut entries = options.entries.clone();
    if let Some(build_dir) = &options.build_dir {
        entries.push(("build_dir".to_string(), build_dir.clone()));
    }
    if let Some(dist) = &options.arduino_dist {
        entries.push(("arduino_dist_dir".to_string(), dist.clone()));
    }

    let config = EnvironmentConfig::from_env();
    tracing::debug!(build_dir = %config.build_dir, explicit = entries.len(), "opening environment");
    let env = ResourceEnvironment::with_entries(config, entries)?;
    Ok(env.with_reporter(ConsoleReporter))
}

pub(crate) fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
