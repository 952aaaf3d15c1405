use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::adapters::archive::tar_writer::write_key_archive;
use crate::core::errors::{GnupgToolsError, Result};
use crate::core::models::key_material::KeyMaterial;
use crate::core::traits::key_tool::KeyTool;

/// All lowercase or all uppercase hex digits, never mixed.
static RE_HEX_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-f0-9]+$|^[A-F0-9]+$").expect("hex pattern is always valid")
});

pub fn validate_hex_id(hex_id: &str) -> Result<()> {
    if RE_HEX_NUMBER.is_match(hex_id) {
        Ok(())
    } else {
        Err(GnupgToolsError::InvalidKeyId {
            id: hex_id.to_string(),
        })
    }
}

/// Export key `hex_id` into `<hex_id>.tar.gz` in the working directory.
///
/// Returns the absolute path of the archive.
pub fn export_keys<T: KeyTool>(tool: &T, hex_id: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    export_keys_to(tool, hex_id, &cwd)
}

/// Export key `hex_id` into `<hex_id>.tar.gz` inside `dir`.
///
/// The public keys, all secret keys and the secret subkeys are exported
/// armored, one key tool call each, and stored as `<hex_id>.pub`,
/// `<hex_id>.priv` and `<hex_id>.subkeys`. The key tool's exit status is
/// not inspected; whatever it printed is what gets archived.
pub fn export_keys_to<T: KeyTool>(tool: &T, hex_id: &str, dir: &Path) -> Result<PathBuf> {
    validate_hex_id(hex_id)?;

    let mut members = Vec::with_capacity(KeyMaterial::ALL.len());
    for material in KeyMaterial::ALL {
        let output = tool.export(material, hex_id)?;
        let name = material.member_name(hex_id);
        tracing::info!(member = %name, "exported {material}");
        members.push((name, output.stdout));
    }

    let tar_path = std::path::absolute(dir.join(format!("{hex_id}.tar.gz")))?;
    write_key_archive(&tar_path, &members)?;
    Ok(tar_path)
}
