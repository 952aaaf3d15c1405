#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

/// Stand-in for gpg. Logs its arguments, prints a canned listing, prints
/// one armored block per export and appends imported files to a log.
const FAKE_GPG: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_GPG_LOG"
case "$1" in
  --list-secret-keys)
    cat "$FAKE_GPG_LISTING"
    ;;
  --armor)
    printf -- '-----BEGIN FAKE BLOCK-----\n%s %s\n-----END FAKE BLOCK-----\n' "$2" "$3"
    ;;
  --import)
    cat "$2" >> "$FAKE_GPG_IMPORTED"
    if [ -n "$FAKE_GPG_FAIL" ]; then
      echo "gpg: import failed" >&2
      exit 2
    fi
    echo "gpg: key imported" >&2
    ;;
esac
exit 0
"#;

pub const TWO_USERS: &str = "\
/tmp/gnupghome/secring.gpg
--------------------------
sec   2048R/16FD1DE8 2015-01-06
uid                  Gnupg Testuser (no real person) <gnupg@example.org>
uid                  Gnupg Testuser (Other Identity) <gnupg@example.org>
ssb   2048R/75DD62A6 2015-01-06

sec   2048R/DAA011C5 2015-01-06
uid                  Bob Tester <bob@example.org>
ssb   2048R/8C9F8A5B 2015-01-06
";

/// Installed once per test binary, before any test spawns a process,
/// so no child can inherit the script's write handle.
static FAKE_GPG_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap().into_persistent();
    let path = dir.path().join("gpg_fake");
    std::fs::write(&path, FAKE_GPG).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o700)).unwrap();
    path
});

/// A working directory plus the files the fake gpg talks through.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        LazyLock::force(&FAKE_GPG_PATH);
        let dir = TempDir::new().unwrap();
        dir.child("work").create_dir_all().unwrap();
        dir.child("config").create_dir_all().unwrap();
        dir.child("listing").write_str("").unwrap();
        Self { dir }
    }

    pub fn fake_gpg(&self) -> &Path {
        &FAKE_GPG_PATH
    }

    pub fn workdir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn set_listing(&self, listing: &str) {
        self.dir.child("listing").write_str(listing).unwrap();
    }

    /// Where `dirs::config_dir()` points for a process run by `isolate`.
    fn config_root(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.dir.path().join("Library/Application Support")
        } else {
            self.dir.path().join("config")
        }
    }

    /// Write `<config dir>/gnupgtools/config.toml`.
    pub fn set_config(&self, toml: &str) {
        let dir = ChildPath::new(self.config_root().join("gnupgtools"));
        dir.create_dir_all().unwrap();
        dir.child("config.toml").write_str(toml).unwrap();
    }

    /// Every argument line the fake gpg was called with.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("gpg.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Concatenated content of every file handed to `--import`.
    pub fn imported(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("imported")).unwrap_or_default()
    }

    pub fn export_cmd(&self) -> Command {
        self.isolate(cargo_bin_cmd!("gpg-export-master-key"))
    }

    pub fn import_cmd(&self) -> Command {
        self.isolate(cargo_bin_cmd!("gpg-import-master-key"))
    }

    /// Run inside the sandbox with config and log settings isolated.
    fn isolate(&self, mut cmd: Command) -> Command {
        cmd.current_dir(self.workdir())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_root())
            .env("FAKE_GPG_LOG", self.dir.path().join("gpg.log"))
            .env("FAKE_GPG_LISTING", self.dir.path().join("listing"))
            .env("FAKE_GPG_IMPORTED", self.dir.path().join("imported"))
            .env_remove("FAKE_GPG_FAIL")
            .env_remove("GNUPGTOOLS_LOG");
        cmd
    }
}
