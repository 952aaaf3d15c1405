use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{GnupgToolsError, Result};
use crate::core::models::key_material::KeyMaterial;

/// Name of the key tool looked up on `PATH` when nothing else is set.
pub const DEFAULT_GPG_BINARY: &str = "gpg";

/// Optional user configuration read from
/// `<config dir>/gnupgtools/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub gpg: GpgSection,
    pub import: ImportSection,
}

impl AppConfig {
    /// Load the configuration at `path`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GnupgToolsError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Load from the default location, if the platform has one.
    pub fn load_default() -> Result<Self> {
        match default_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve the key tool settings. `binary_override` comes from the
    /// command line and wins over the file.
    pub fn gpg_config(&self, binary_override: Option<&Path>) -> GpgConfig {
        let binary = binary_override
            .map(Path::to_path_buf)
            .or_else(|| self.gpg.binary.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GPG_BINARY));
        GpgConfig {
            binary,
            home: self.gpg.home.clone(),
        }
    }
}

/// `<config dir>/gnupgtools/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gnupgtools").join("config.toml"))
}

/// The `[gpg]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpgSection {
    pub binary: Option<PathBuf>,
    /// Keyring directory handed to the key tool as `GNUPGHOME`.
    pub home: Option<PathBuf>,
}

/// The `[import]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportSection {
    pub policy: ImportPolicy,
}

/// Which archive members get imported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportPolicy {
    /// Only `<id>.pub`.
    PublicOnly,
    /// `<id>.pub`, then `<id>.subkeys`. The master secret stays behind.
    #[default]
    PublicAndSubkeys,
    /// `<id>.pub`, `<id>.subkeys`, then `<id>.priv`.
    All,
}

impl ImportPolicy {
    /// Members to import, in import order.
    pub fn materials(self) -> &'static [KeyMaterial] {
        match self {
            Self::PublicOnly => &[KeyMaterial::Public],
            Self::PublicAndSubkeys => &[KeyMaterial::Public, KeyMaterial::SecretSubkeys],
            Self::All => &[
                KeyMaterial::Public,
                KeyMaterial::SecretSubkeys,
                KeyMaterial::Secret,
            ],
        }
    }
}

/// Everything needed to launch the key tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgConfig {
    /// Executable path or a name resolved through `PATH`.
    pub binary: PathBuf,
    /// Set as `GNUPGHOME` on the child process only. `None` leaves the
    /// inherited environment alone.
    pub home: Option<PathBuf>,
}

impl Default for GpgConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_GPG_BINARY),
            home: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("/PrObAbLyNoTeXiStInG/config.toml")).unwrap();
        assert_eq!(config.import.policy, ImportPolicy::PublicAndSubkeys);
        assert_eq!(config.gpg_config(None), GpgConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[gpg]\nbinary = \"/usr/bin/gpg2\"\nhome = \"/tmp/gnupghome\"\n\n\
             [import]\npolicy = \"all\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.import.policy, ImportPolicy::All);
        let gpg = config.gpg_config(None);
        assert_eq!(gpg.binary, PathBuf::from("/usr/bin/gpg2"));
        assert_eq!(gpg.home, Some(PathBuf::from("/tmp/gnupghome")));
    }

    #[test]
    fn command_line_binary_wins() {
        let config: AppConfig = toml::from_str("[gpg]\nbinary = \"gpg2\"\n").unwrap();
        let gpg = config.gpg_config(Some(Path::new("/opt/gpg")));
        assert_eq!(gpg.binary, PathBuf::from("/opt/gpg"));
    }

    #[test]
    fn malformed_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[import]\npolicy = \"everything\"\n").unwrap();

        let result = AppConfig::load(&path);
        assert!(matches!(result, Err(GnupgToolsError::InvalidConfig { .. })));
    }

    #[test]
    fn policy_materials_in_import_order() {
        assert_eq!(ImportPolicy::PublicOnly.materials(), &[KeyMaterial::Public]);
        assert_eq!(
            ImportPolicy::PublicAndSubkeys.materials(),
            &[KeyMaterial::Public, KeyMaterial::SecretSubkeys]
        );
        assert_eq!(ImportPolicy::All.materials().len(), 3);
    }
}
