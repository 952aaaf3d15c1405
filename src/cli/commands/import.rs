use std::process::ExitCode;

use crate::adapters::archive::tar_reader::is_valid_input_file;
use crate::adapters::gpg::gpg_binary::GpgBinary;
use crate::cli::{ImportCli, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::{GnupgToolsError, Result};
use crate::core::services::import_service::import_master_key;

/// Exit status for an input file that is not a key archive.
pub const EXIT_INVALID_ARCHIVE: u8 = 2;

/// Execute the `gpg-import-master-key` command.
///
/// Everything the key tool prints is passed through. A key tool that
/// reports failure for any member turns into `ImportFailed`.
pub fn execute(args: &ImportCli) -> Result<ExitCode> {
    if let Err(reason) = is_valid_input_file(Some(&args.infile)) {
        tracing::debug!(path = %args.infile.display(), %reason, "rejected input file");
        eprintln!("Not a valid master key archive: {}", args.infile.display());
        return Ok(ExitCode::from(EXIT_INVALID_ARCHIVE));
    }

    let config = AppConfig::load_default()?;
    let tool = GpgBinary::new(config.gpg_config(args.binary.as_deref()));
    tracing::debug!(
        binary = %tool.config().binary.display(),
        policy = ?config.import.policy,
        "importing master key archive"
    );

    let reports = import_master_key(&tool, &args.infile, config.import.policy)?;
    for report in &reports {
        output::forward(&report.output.stdout, &report.output.stderr)?;
    }

    if let Some(failed) = reports.iter().find(|r| !r.succeeded()) {
        return Err(GnupgToolsError::ImportFailed {
            member: failed.material.to_string(),
            detail: format!("key tool exited with {}", failed.output.status),
        });
    }
    Ok(ExitCode::SUCCESS)
}
