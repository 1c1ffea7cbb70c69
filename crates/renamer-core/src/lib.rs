pub mod date;
pub mod dir_scan;
pub mod media;
pub mod naming;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

pub use writer::MoveError;

/// Destination directory created under the source root.
pub const DEFAULT_DEST_DIR: &str = "renamed_files";

fn default_dest_dir_name() -> String {
    DEFAULT_DEST_DIR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOptions {
    pub source: PathBuf,
    #[serde(default = "default_dest_dir_name")]
    pub dest_dir_name: String,
    /// Only visit files whose extension looks like an image or video
    #[serde(default)]
    pub media_only: bool,
}

impl ProcessOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_dir_name: default_dest_dir_name(),
            media_only: false,
        }
    }

    pub fn dest_dir(&self) -> PathBuf {
        self.source.join(&self.dest_dir_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessResult {
    pub total_files: u64,
    pub files_moved: u64,
    pub files_skipped: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    Moved(PathBuf),
    /// No date could be resolved; the file was left in place
    Skipped,
}

/// Type alias for progress callback: (stage, current, total, message)
pub type ProgressCallback = dyn Fn(&str, u64, u64, &str) + Send + Sync;

/// Resolve, name and place a single file.
pub fn process_file(file: &media::SourceFile, dest_dir: &Path) -> Result<PlaceOutcome, MoveError> {
    let exif_date = if date::exif::has_exif_container(&file.extension_lower()) {
        date::exif::extract_exif_date(&file.path)
    } else {
        None
    };
    let times = date::FileTimes::from_metadata(file.metadata.as_ref());

    let Some(resolved) = date::resolve_date(exif_date, times) else {
        return Ok(PlaceOutcome::Skipped);
    };

    let base_name = naming::base_name(&resolved.date, file.size(), &file.filename);
    let dest = writer::place_file(&file.path, dest_dir, &base_name, &file.extension)?;
    Ok(PlaceOutcome::Moved(dest))
}

/// Walk the source tree and move every dated file into the destination directory.
/// A move failure aborts the run; files moved before it stay moved.
pub fn process(options: &ProcessOptions, progress_callback: &ProgressCallback) -> anyhow::Result<ProcessResult> {
    if !options.source.is_dir() {
        bail!("Source is not a readable directory: {}", options.source.display());
    }

    let dest_dir = options.dest_dir();
    fs::create_dir_all(&dest_dir)
        .with_context(|| format!("Failed to create destination directory {}", dest_dir.display()))?;

    // Stage 1: walk (destination excluded), then process the list
    let scan = dir_scan::scan_dir(&options.source, &dest_dir, options.media_only);
    let total = scan.files.len() as u64;
    for warning in &scan.warnings {
        progress_callback("warn", 0, total, warning.as_str());
    }
    let message = format!("Found {} files", total);
    progress_callback("scan", total, total, message.as_str());

    // Stage 2: one file at a time
    let mut result = ProcessResult {
        total_files: total,
        warnings: scan.warnings,
        ..Default::default()
    };
    for (i, path) in scan.files.into_iter().enumerate() {
        let file = media::SourceFile::new(path);
        match process_file(&file, &dest_dir)? {
            PlaceOutcome::Moved(dest) => {
                result.files_moved += 1;
                let message = format!("{} -> {}", file.path.display(), dest.display());
                progress_callback("move", i as u64, total, message.as_str());
            }
            PlaceOutcome::Skipped => {
                result.files_skipped += 1;
                let message = format!("Skipping {} as no date could be determined.", file.path.display());
                progress_callback("skip", i as u64, total, message.as_str());
            }
        }
    }

    Ok(result)
}
