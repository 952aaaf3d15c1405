use std::path::Path;

use crate::adapters::archive::tar_reader::extract_archive;
use crate::config::app_config::ImportPolicy;
use crate::core::errors::{GnupgToolsError, Result};
use crate::core::models::key_bundle::KeyBundle;
use crate::core::models::key_material::KeyMaterial;
use crate::core::traits::key_tool::KeyTool;
use crate::support::process::CommandOutput;
use crate::support::tmp_dir::with_tmp_dir;

/// Result of one key tool import call.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub material: KeyMaterial,
    pub output: CommandOutput,
}

impl ImportReport {
    pub fn succeeded(&self) -> bool {
        self.output.success()
    }
}

/// Read the key bundle stored in the archive at `path`.
pub fn keys_from_archive(path: &Path) -> Result<KeyBundle> {
    let members = extract_archive(path)?;
    KeyBundle::from_members(members, path)
}

/// Import the archive at `path` according to `policy`.
pub fn import_master_key<T: KeyTool>(
    tool: &T,
    path: &Path,
    policy: ImportPolicy,
) -> Result<Vec<ImportReport>> {
    let bundle = keys_from_archive(path)?;
    import_bundle(tool, &bundle, policy)
}

/// Feed the members selected by `policy` to the key tool, one call each.
///
/// Every required member is checked before the first call so a broken
/// archive never leaves a half-imported key behind. Each member goes
/// through its own temporary directory. Failed imports are reported,
/// not raised; only a key tool that cannot be launched is an error.
pub fn import_bundle<T: KeyTool>(
    tool: &T,
    bundle: &KeyBundle,
    policy: ImportPolicy,
) -> Result<Vec<ImportReport>> {
    let mut selected = Vec::new();
    for &material in policy.materials() {
        let data = bundle
            .get(material)
            .ok_or_else(|| GnupgToolsError::MissingMember {
                member: material.member_name(&bundle.key),
            })?;
        selected.push((material, data));
    }

    let mut reports = Vec::with_capacity(selected.len());
    for (material, data) in selected {
        let output = with_tmp_dir(|dir| {
            let infile = dir.join(format!("key.{}", material.suffix()));
            std::fs::write(&infile, data)?;
            tool.import(&infile)
        })?;
        tracing::info!(key = %bundle.key, status = %output.status, "imported {material}");
        reports.push(ImportReport { material, output });
    }
    Ok(reports)
}
