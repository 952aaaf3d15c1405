use std::fmt;
use std::path::PathBuf;

/// Why a file was rejected as an import archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    NoSuchFile,
    NotATarArchive,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchFile => write!(f, "no such file"),
            Self::NotATarArchive => write!(f, "not a tar archive"),
        }
    }
}

/// All domain errors for gnupgtools.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum GnupgToolsError {
    #[error(
        "Not a valid hex number: '{id}'\n\n  \
         Key ids must be all lowercase or all uppercase hexadecimal digits."
    )]
    InvalidKeyId { id: String },

    #[error(
        "Key names in archive not consistent: '{first}' and '{second}'\n\n  \
         An exported archive holds the members of exactly one key.\n  \
         The archive may be corrupted or tampered with."
    )]
    InconsistentKeyNames { first: String, second: String },

    #[error(
        "No key material found in {}\n\n  \
         Expected members named <key-id>.pub, <key-id>.priv and <key-id>.subkeys.",
        path.display()
    )]
    NoKeyMaterial { path: PathBuf },

    #[error(
        "Archive member '{member}' is missing\n\n  \
         The configured import policy needs it.\n  \
         Re-export the key with gpg-export-master-key."
    )]
    MissingMember { member: String },

    #[error(
        "Failed to run '{program}': {source}\n\n  \
         Check that GnuPG is installed and the path given with --binary is correct."
    )]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Importing {member} failed: {detail}")]
    ImportFailed { member: String, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GnupgToolsError>;
