use std::path::Path;

use crate::core::errors::Result;

/// Run `f` with a fresh, empty temporary directory.
///
/// The directory and everything in it is removed when `f` returns,
/// whether it succeeded, failed or panicked.
pub fn with_tmp_dir<T, F>(f: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let dir = tempfile::Builder::new().prefix("gnupgtools-").tempdir()?;
    let value = f(dir.path())?;
    dir.close()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::GnupgToolsError;
    use std::path::PathBuf;

    #[test]
    fn directory_exists_inside_scope_and_is_empty() {
        with_tmp_dir(|dir| {
            assert!(dir.is_dir());
            assert_eq!(std::fs::read_dir(dir)?.count(), 0);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn directory_removed_after_normal_exit() {
        let path = with_tmp_dir(|dir| {
            std::fs::write(dir.join("key.pub"), b"content")?;
            Ok(dir.to_path_buf())
        })
        .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn directory_removed_after_error() {
        let mut seen = PathBuf::new();
        let result: Result<()> = with_tmp_dir(|dir| {
            seen = dir.to_path_buf();
            std::fs::write(dir.join("key.pub"), b"content")?;
            Err(GnupgToolsError::InvalidConfig {
                detail: "boom".into(),
            })
        });
        assert!(result.is_err());
        assert!(!seen.as_os_str().is_empty());
        assert!(!seen.exists());
    }

    #[test]
    fn directory_removed_after_panic() {
        let seen = std::sync::Mutex::new(PathBuf::new());
        let outcome = std::panic::catch_unwind(|| {
            let _: Result<()> = with_tmp_dir(|dir| {
                *seen.lock().unwrap() = dir.to_path_buf();
                panic!("boom");
            });
        });
        assert!(outcome.is_err());
        let seen = seen.into_inner().unwrap();
        assert!(!seen.as_os_str().is_empty());
        assert!(!seen.exists());
    }
}
