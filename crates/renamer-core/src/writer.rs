use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Find a free name in `dest_dir`: `{base}{ext}`, then `{base}_2{ext}`, `{base}_3{ext}`, ...
/// Existence is re-checked on disk for every probe.
pub fn assign_destination(dest_dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    let candidate = dest_dir.join(format!("{}{}", base_name, extension));
    if !exists(&candidate) {
        return candidate;
    }
    let mut counter = 2u64;
    loop {
        let candidate = dest_dir.join(format!("{}_{}{}", base_name, counter, extension));
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

// Dangling symlinks still occupy the name.
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Move `source` into `dest_dir` under a collision-free name. Returns the final path.
pub fn place_file(
    source: &Path,
    dest_dir: &Path,
    base_name: &str,
    extension: &str,
) -> Result<PathBuf, MoveError> {
    let dest = assign_destination(dest_dir, base_name, extension);
    move_file(source, &dest).map_err(|cause| MoveError {
        source_path: source.to_path_buf(),
        dest_path: dest.clone(),
        cause,
    })?;
    Ok(dest)
}

/// Rename, falling back to copy + remove when rename is refused (e.g. across devices).
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    let rename_err = match fs::rename(source, dest) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    let meta = fs::metadata(source).map_err(|_| rename_err)?;
    copy_and_remove(source, dest, &meta, |from, to| fs::copy(from, to))
}

/// Copy to `dest`, restore the mtime, then drop `source`.
/// On any failure `dest` is removed again so no partial file keeps the name.
fn copy_and_remove(
    source: &Path,
    dest: &Path,
    meta: &Metadata,
    copy: fn(&Path, &Path) -> io::Result<u64>,
) -> io::Result<()> {
    if let Err(e) = copy(source, dest) {
        fs::remove_file(dest).ok();
        return Err(e);
    }
    let mtime = filetime::FileTime::from_last_modification_time(meta);
    filetime::set_file_mtime(dest, mtime).ok();

    if let Err(e) = fs::remove_file(source) {
        fs::remove_file(dest).ok();
        return Err(e);
    }
    Ok(())
}

/// A file could not be moved into the destination directory.
#[derive(Debug)]
pub struct MoveError {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    pub cause: io::Error,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to move {} -> {}: {}",
            self.source_path.display(),
            self.dest_path.display(),
            self.cause
        )
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collision_suffixes() {
        let dir = tempdir().unwrap();
        let dest = dir.path();
        let base = "20210101_000000_1000";

        assert_eq!(assign_destination(dest, base, ".jpg"), dest.join("20210101_000000_1000.jpg"));
        fs::write(dest.join("20210101_000000_1000.jpg"), b"a").unwrap();
        assert_eq!(assign_destination(dest, base, ".jpg"), dest.join("20210101_000000_1000_2.jpg"));
        fs::write(dest.join("20210101_000000_1000_2.jpg"), b"b").unwrap();
        assert_eq!(assign_destination(dest, base, ".jpg"), dest.join("20210101_000000_1000_3.jpg"));
        // Other extensions do not collide
        assert_eq!(assign_destination(dest, base, ".png"), dest.join("20210101_000000_1000.png"));
    }

    #[test]
    fn test_place_never_overwrites() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        let first = dir.path().join("a.JPG");
        let second = dir.path().join("b.JPG");
        fs::write(&first, b"first").unwrap();
        fs::write(&second, b"second").unwrap();

        let p1 = place_file(&first, &dest, "20210101_000000_5", ".JPG").unwrap();
        let p2 = place_file(&second, &dest, "20210101_000000_5", ".JPG").unwrap();

        assert_eq!(p1, dest.join("20210101_000000_5.JPG"));
        assert_eq!(p2, dest.join("20210101_000000_5_2.JPG"));
        assert_eq!(fs::read(&p1).unwrap(), b"first");
        assert_eq!(fs::read(&p2).unwrap(), b"second");
        assert!(!first.exists());
        assert!(!second.exists());
    }

    #[test]
    fn test_copy_fallback_keeps_content_and_mtime() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("clip.mp4");
        let dest = dir.path().join("20200101_000000_5.mp4");
        fs::write(&source, b"video").unwrap();
        let mtime = filetime::FileTime::from_unix_time(1_500_000_000, 0);
        filetime::set_file_mtime(&source, mtime).unwrap();
        let meta = fs::metadata(&source).unwrap();

        copy_and_remove(&source, &dest, &meta, |from, to| fs::copy(from, to)).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"video");
        let copied = fs::metadata(&dest).unwrap();
        assert_eq!(filetime::FileTime::from_last_modification_time(&copied), mtime);
    }

    #[test]
    fn test_failed_copy_leaves_no_partial_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("clip.mp4");
        let dest = dir.path().join("20200101_000000_5.mp4");
        fs::write(&source, b"video").unwrap();
        let meta = fs::metadata(&source).unwrap();

        // Writes half the data, then runs out of space
        let err = copy_and_remove(&source, &dest, &meta, |_, to| {
            fs::write(to, b"vi")?;
            Err(io::Error::other("no space left on device"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "no space left on device");
        assert!(!dest.exists());
        assert_eq!(fs::read(&source).unwrap(), b"video");
    }

    #[test]
    fn test_missing_source_is_move_error() {
        let dir = tempdir().unwrap();
        let err = place_file(&dir.path().join("gone.jpg"), dir.path(), "x", ".jpg").unwrap_err();
        assert_eq!(err.cause.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Failed to move"));
        assert!(!dir.path().join("x.jpg").exists());
    }
}
