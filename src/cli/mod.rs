pub mod commands;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "GNUPGTOOLS_LOG";

/// Export GnuPG master key
#[derive(Parser, Debug)]
#[command(name = "gpg-export-master-key", long_about = None)]
pub struct ExportCli {
    /// Path to GnuPG binary to use
    #[arg(short = 'b', long = "binary", value_name = "PATH")]
    pub binary: Option<PathBuf>,
}

/// Import GnuPG master key
#[derive(Parser, Debug)]
#[command(name = "gpg-import-master-key", long_about = None)]
pub struct ImportCli {
    /// tar.gz file created by gpg-export-master-key.
    #[arg(value_name = "FILE")]
    pub infile: PathBuf,

    /// Path to GnuPG binary to use
    #[arg(short = 'b', long = "binary", value_name = "PATH")]
    pub binary: Option<PathBuf>,
}

/// Send diagnostics to stderr, filtered by `GNUPGTOOLS_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
