use std::collections::BTreeMap;
use std::path::Path;

use crate::core::errors::{GnupgToolsError, Result};
use crate::core::models::key_material::KeyMaterial;

/// Archive members that passed the extraction filter, by member name.
pub type ImportBundle = BTreeMap<String, Vec<u8>>;

/// The members of one exported key, keyed by material kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBundle {
    /// Short key id shared by every member.
    pub key: String,
    members: BTreeMap<KeyMaterial, Vec<u8>>,
}

impl KeyBundle {
    /// Normalize filtered archive members into a bundle.
    ///
    /// Every member must carry the same base name. `source` is only used
    /// for error reporting.
    pub fn from_members(members: ImportBundle, source: &Path) -> Result<Self> {
        let mut key: Option<String> = None;
        let mut by_material = BTreeMap::new();

        for (name, content) in members {
            let Some((base, suffix)) = name.rsplit_once('.') else {
                continue;
            };
            let Some(material) = KeyMaterial::from_suffix(suffix) else {
                continue;
            };
            match &key {
                Some(existing) if existing != base => {
                    return Err(GnupgToolsError::InconsistentKeyNames {
                        first: existing.clone(),
                        second: base.to_string(),
                    });
                }
                Some(_) => {}
                None => key = Some(base.to_string()),
            }
            by_material.insert(material, content);
        }

        match key {
            Some(key) => Ok(Self {
                key,
                members: by_material,
            }),
            None => Err(GnupgToolsError::NoKeyMaterial {
                path: source.to_path_buf(),
            }),
        }
    }

    pub fn get(&self, material: KeyMaterial) -> Option<&[u8]> {
        self.members.get(&material).map(Vec::as_slice)
    }

    /// Material kinds present in this bundle.
    pub fn materials(&self) -> impl Iterator<Item = KeyMaterial> + '_ {
        self.members.keys().copied()
    }
}
