use std::cell::RefCell;
use std::path::Path;
use std::process::ExitStatus;

use crate::core::errors::Result;
use crate::core::models::key_material::KeyMaterial;
use crate::core::traits::key_tool::KeyTool;
use crate::support::process::CommandOutput;

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

pub fn output(code: i32, stdout: &[u8]) -> CommandOutput {
    CommandOutput {
        status: exit_status(code),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

/// In-memory key tool that records every call.
#[derive(Default)]
pub struct FakeKeyTool {
    pub listing: Vec<u8>,
    pub import_exit_code: i32,
    pub exports: RefCell<Vec<(KeyMaterial, String)>>,
    /// File name and content of every imported file, read at call time.
    pub imports: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FakeKeyTool {
    pub fn with_listing(listing: &str) -> Self {
        Self {
            listing: listing.as_bytes().to_vec(),
            ..Self::default()
        }
    }

    /// What `export` returns for the given material and id.
    pub fn exported(material: KeyMaterial, key_id: &str) -> Vec<u8> {
        format!("-----BEGIN {material}-----\n{key_id}\n").into_bytes()
    }
}

impl KeyTool for FakeKeyTool {
    fn list_secret_keys(&self) -> Result<CommandOutput> {
        Ok(output(0, &self.listing))
    }

    fn export(&self, material: KeyMaterial, key_id: &str) -> Result<CommandOutput> {
        self.exports
            .borrow_mut()
            .push((material, key_id.to_string()));
        Ok(output(0, &Self::exported(material, key_id)))
    }

    fn import(&self, path: &Path) -> Result<CommandOutput> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = std::fs::read(path)?;
        self.imports.borrow_mut().push((name, content));
        Ok(output(self.import_exit_code, b""))
    }
}
