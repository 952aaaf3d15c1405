use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::key_material::KeyMaterial;
use crate::support::process::CommandOutput;

/// Port for the external key-management executable.
///
/// Implementations live in `adapters::gpg`. Services only depend on this
/// trait, never on a concrete binary. None of the methods interpret the
/// tool's exit status: a launch failure is an error, anything the tool
/// prints or returns is handed back to the caller as-is.
pub trait KeyTool {
    /// List all keys with secret parts available.
    fn list_secret_keys(&self) -> Result<CommandOutput>;

    /// Export one kind of key material for `key_id`, armored.
    fn export(&self, material: KeyMaterial, key_id: &str) -> Result<CommandOutput>;

    /// Import the key file at `path` into the keyring.
    fn import(&self, path: &Path) -> Result<CommandOutput>;
}
