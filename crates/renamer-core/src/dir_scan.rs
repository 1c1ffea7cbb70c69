use std::fs;
use std::path::{Path, PathBuf};

use crate::media::is_media_file;

/// Result of the tree walk.
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Recursively collect every non-directory entry under `root`, in read_dir order.
/// `exclude` (the destination directory) is never entered.
pub fn scan_dir(root: &Path, exclude: &Path, media_only: bool) -> ScanResult {
    let exclude_canonical = exclude.canonicalize().ok();
    let mut result = ScanResult { files: Vec::new(), warnings: Vec::new() };
    scan_dir_recursive(root, exclude, exclude_canonical.as_deref(), media_only, &mut result);
    result
}

fn scan_dir_recursive(
    dir: &Path,
    exclude: &Path,
    exclude_canonical: Option<&Path>,
    media_only: bool,
    result: &mut ScanResult,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            result.warnings.push(format!("Cannot read directory {}: {}", dir.display(), e));
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.warnings.push(format!("Cannot read entry in {}: {}", dir.display(), e));
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                result.warnings.push(format!("Cannot stat {}: {}", path.display(), e));
                continue;
            }
        };
        if file_type.is_dir() {
            if is_excluded(&path, exclude, exclude_canonical) {
                continue;
            }
            scan_dir_recursive(&path, exclude, exclude_canonical, media_only, result);
        } else if file_type.is_symlink() && path.is_dir() {
            // Directory symlinks are not followed
            continue;
        } else if !media_only || is_media_file(&path) {
            result.files.push(path);
        }
    }
}

fn is_excluded(path: &Path, exclude: &Path, exclude_canonical: Option<&Path>) -> bool {
    if path == exclude {
        return true;
    }
    match (path.canonicalize(), exclude_canonical) {
        (Ok(canonical), Some(excluded)) => canonical == excluded,
        _ => false,
    }
}
