//! Whole-file replacement through a sibling temp file and rename

use crate::domain::DurabilityMode;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace the contents of `path` with `bytes` in one atomic step.
///
/// Readers see either the old file or the new one, never a mix. On failure
/// the temp file is removed and the original is left as it was. `Ok` means
/// the new contents are in place.
pub fn write_atomic(path: &Path, bytes: &[u8], durability: DurabilityMode) -> io::Result<()> {
    write_atomic_with(path, bytes, durability, sync_parent)
}

/// [`write_atomic`] with the parent-directory sync supplied by the caller.
///
/// Once the rename has landed the write is reported as successful; a failed
/// directory sync after that point is only logged.
pub(crate) fn write_atomic_with(
    path: &Path,
    bytes: &[u8],
    durability: DurabilityMode,
    sync_dir: fn(&Path) -> io::Result<()>,
) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    let write_result = (|| -> io::Result<()> {
        let mut temp_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)?;

        temp_file.write_all(bytes)?;
        temp_file.flush()?;
        if durability == DurabilityMode::Fsync {
            temp_file.sync_all()?;
        }
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if durability == DurabilityMode::Fsync {
        if let Err(e) = sync_dir(path) {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "renamed into place but parent directory sync failed"
            );
        }
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("collection"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
pub(crate) fn sync_parent(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let dir = OpenOptions::new().read(true).open(parent)?;
    dir.sync_all()
}

// Directory handles can't be synced on Windows; the rename is still atomic.
#[cfg(not(unix))]
pub(crate) fn sync_parent(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("images.shelf");

        write_atomic(&path, b"first", DurabilityMode::Fsync).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("images.shelf");

        write_atomic(&path, b"a much longer first version", DurabilityMode::Flush).unwrap();
        write_atomic(&path, b"short", DurabilityMode::Flush).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("images.shelf");

        write_atomic(&path, b"data", DurabilityMode::Fsync).unwrap();

        assert!(!temp.path().join("images.shelf.tmp").exists());
        let count = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_missing_parent_fails_without_touching_anything() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("images.shelf");

        assert!(write_atomic(&path, b"data", DurabilityMode::Fsync).is_err());
        assert!(!path.exists());
    }

    fn failing_dir_sync(_path: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "directory sync failed"))
    }

    #[test]
    fn test_dir_sync_failure_after_rename_still_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("images.shelf");
        write_atomic(&path, b"old", DurabilityMode::Fsync).unwrap();

        write_atomic_with(&path, b"new", DurabilityMode::Fsync, failing_dir_sync).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!temp.path().join("images.shelf.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/shelf/.snapshelf/images.shelf");
        assert_eq!(
            temp_path_for(path),
            PathBuf::from("/shelf/.snapshelf/images.shelf.tmp")
        );
    }
}
