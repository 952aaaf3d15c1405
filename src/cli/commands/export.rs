use std::io;
use std::path::PathBuf;

use crate::adapters::gpg::gpg_binary::GpgBinary;
use crate::cli::{ExportCli, output, prompt};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::key_material::KeyMaterial;
use crate::core::services::export_service::export_keys;
use crate::core::services::key_listing::{format_key_list, get_key_list};
use crate::core::services::selection::{Selection, input_key};
use crate::core::traits::key_tool::KeyTool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Startup banner with version and license notice.
pub fn greeting() -> String {
    format!(
        "gpg-export-master-key {VERSION}; Copyright (C) 2015 the gnupgtools contributors. \
         This is free software: you are free to change and redistribute it. \
         There is NO WARRANTY, to the extent permitted by law."
    )
}

/// Execute the `gpg-export-master-key` command.
pub fn execute(args: &ExportCli) -> Result<()> {
    println!("{}", greeting());

    let config = AppConfig::load_default()?;
    let tool = GpgBinary::new(config.gpg_config(args.binary.as_deref()));
    tracing::debug!(binary = %tool.config().binary.display(), "using key tool");

    export_interactively(&tool, prompt::stdin_line)?;
    Ok(())
}

/// List keys, let the operator pick one through `input` and export it
/// into the working directory.
///
/// Returns the archive path, or `None` when there was nothing to export
/// or the operator quit.
pub fn export_interactively<T, F>(tool: &T, input: F) -> Result<Option<PathBuf>>
where
    T: KeyTool,
    F: FnMut(&str) -> io::Result<Option<String>>,
{
    let keys = get_key_list(tool)?;
    output::header("Locally available keys (with secret parts available):");
    if keys.is_empty() {
        output::warning("No keys found. Exiting.");
        return Ok(None);
    }
    print!("{}", format_key_list(&keys));

    let entry_num = match input_key(keys.len(), input)? {
        Selection::Key(num) => num,
        Selection::Quit => {
            println!("Okay, abort.");
            return Ok(None);
        }
    };
    let picked = &keys[entry_num - 1];
    tracing::debug!(key = %picked, "operator picked key");
    println!("Picked key: {entry_num} ({})", picked.short_id);

    let tar_path = export_keys(tool, &picked.short_id)?;
    for material in KeyMaterial::ALL {
        output::success(format!(
            "Extracted {material} to: {}",
            material.member_name(&picked.short_id)
        ));
    }
    println!("\nAll export files written to: {}.", tar_path.display());
    Ok(Some(tar_path))
}
