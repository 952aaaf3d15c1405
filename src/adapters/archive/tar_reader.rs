use std::io::Read;
use std::path::{Component, Path};

use crate::core::errors::{InvalidInput, Result};
use crate::core::models::key_bundle::ImportBundle;
use crate::core::models::key_material::KeyMaterial;
use crate::support::archive_handle::open_archive;

/// Check whether `path` leads to a readable, gzip-compressed tar archive.
///
/// Nothing is extracted. Every member header is read so a truncated or
/// corrupt stream is caught here, but an archive without members passes.
pub fn is_valid_input_file(path: Option<&Path>) -> std::result::Result<(), InvalidInput> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(InvalidInput::NoSuchFile),
    };
    if !path.is_file() {
        return Err(InvalidInput::NoSuchFile);
    }

    match count_members(path) {
        Ok(count) => {
            tracing::debug!(path = %path.display(), members = count, "archive check passed");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "archive check failed");
            Err(InvalidInput::NotATarArchive)
        }
    }
}

fn count_members(path: &Path) -> Result<usize> {
    let mut archive = open_archive(path)?;
    let mut count = 0;
    for entry in archive.entries()? {
        entry?;
        count += 1;
    }
    Ok(count)
}

/// Read the key members of the archive at `path` into memory.
///
/// Only regular files at the top level whose extension is `.pub`,
/// `.priv` or `.subkeys` are kept. Everything else is skipped silently.
pub fn extract_archive(path: &Path) -> Result<ImportBundle> {
    let mut archive = open_archive(path)?;
    let mut result = ImportBundle::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = {
            let member_path = entry.path()?;
            match accepted_name(&member_path) {
                Some(name) => name,
                None => {
                    tracing::debug!(member = %member_path.display(), "ignoring archive member");
                    continue;
                }
            }
        };
        let mut content = Vec::new();
        entry.read_to_end(&mut content)?;
        result.insert(name, content);
    }

    Ok(result)
}

/// The member name, if it is a flat name with a key-material extension.
fn accepted_name(member_path: &Path) -> Option<String> {
    let mut components = member_path.components();
    let (Some(Component::Normal(name)), None) = (components.next(), components.next()) else {
        return None;
    };
    let name = name.to_str()?;
    let extension = Path::new(name).extension()?.to_str()?;
    KeyMaterial::from_suffix(extension)?;
    Some(name.to_string())
}
