//! Helpers shared by the export and import sides.

pub mod archive_handle;
pub mod process;
pub mod tmp_dir;
