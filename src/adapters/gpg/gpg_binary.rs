use std::path::Path;
use std::process::Command;

use crate::config::app_config::GpgConfig;
use crate::core::errors::Result;
use crate::core::models::key_material::KeyMaterial;
use crate::core::traits::key_tool::KeyTool;
use crate::support::process::{CommandOutput, execute};

/// Environment variable GnuPG reads its keyring directory from.
pub const GNUPGHOME: &str = "GNUPGHOME";

/// Key tool backed by the system `gpg` binary (or a compatible one).
pub struct GpgBinary {
    config: GpgConfig,
}

impl GpgBinary {
    pub fn new(config: GpgConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GpgConfig {
        &self.config
    }

    /// A command for the configured binary with `GNUPGHOME` applied.
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.binary);
        if let Some(home) = &self.config.home {
            cmd.env(GNUPGHOME, home);
        }
        cmd
    }

    fn export_flag(material: KeyMaterial) -> &'static str {
        match material {
            KeyMaterial::Public => "--export",
            KeyMaterial::Secret => "--export-secret-keys",
            KeyMaterial::SecretSubkeys => "--export-secret-subkeys",
        }
    }
}

impl Default for GpgBinary {
    fn default() -> Self {
        Self::new(GpgConfig::default())
    }
}

impl KeyTool for GpgBinary {
    fn list_secret_keys(&self) -> Result<CommandOutput> {
        // short ids keep the `algo/KEYID` form on GnuPG 2.x
        execute(
            self.command()
                .args(["--list-secret-keys", "--keyid-format", "short"]),
        )
    }

    fn export(&self, material: KeyMaterial, key_id: &str) -> Result<CommandOutput> {
        execute(
            self.command()
                .args(["--armor", Self::export_flag(material), key_id]),
        )
    }

    fn import(&self, path: &Path) -> Result<CommandOutput> {
        execute(self.command().arg("--import").arg(path))
    }
}
