use std::fs::{self, File, OpenOptions};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tar::{Archive, Builder};

use crate::core::errors::Result;

/// Writer side of a `.tar.gz` archive.
pub type ArchiveWriter = Builder<GzEncoder<File>>;

/// Reader side of a `.tar.gz` archive.
pub type ArchiveReader = Archive<GzDecoder<File>>;

/// Owner read/write only (`rw-------`).
pub const PERM_USER_RW_ONLY: u32 = 0o600;

/// Create the archive at `path`, let `fill` add members, then finish it.
///
/// The archive file is restricted to [`PERM_USER_RW_ONLY`] before the
/// first byte is written. When `fill` (or finishing the stream) fails,
/// the handle is closed and the partial archive is removed.
pub fn with_archive_writer<T, F>(path: &Path, fill: F) -> Result<T>
where
    F: FnOnce(&mut ArchiveWriter) -> Result<T>,
{
    let file = create_private_file(path)?;
    let mut builder = Builder::new(GzEncoder::new(file, Compression::default()));

    let result = fill(&mut builder).and_then(|value| {
        let encoder = builder.into_inner()?;
        encoder.finish()?;
        Ok(value)
    });

    if result.is_err() {
        tracing::debug!(path = %path.display(), "removing partially written archive");
        let _ = fs::remove_file(path);
    }
    result
}

/// Open the `.tar.gz` archive at `path` for reading.
///
/// The file handle lives as long as the returned reader and is closed
/// when it is dropped.
pub fn open_archive(path: &Path) -> Result<ArchiveReader> {
    let file = File::open(path)?;
    Ok(Archive::new(GzDecoder::new(file)))
}

#[cfg(unix)]
fn create_private_file(path: &Path) -> Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(PERM_USER_RW_ONLY)
        .open(path)?;
    // an already existing file keeps its old mode on open
    fs::set_permissions(path, fs::Permissions::from_mode(PERM_USER_RW_ONLY))?;
    Ok(file)
}

#[cfg(not(unix))]
fn create_private_file(path: &Path) -> Result<File> {
    Ok(OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?)
}
