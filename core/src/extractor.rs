//! The extraction run: select cache files, stage them, classify by
//! resolution, and record them in the history.
//!
//! A run is strictly sequential. Each qualifying cache file is copied into
//! the staging directory with a `.jpg` suffix, probed for its pixel size,
//! and moved into the matching destination directory. Staged files that
//! match neither wallpaper resolution stay behind in staging, which is
//! deleted wholesale at the end of the run.

use crate::config::ExtractorConfig;
use crate::history::{self, HistoryError};
use crate::orientation::{classify_dimensions, Orientation};
use image::io::Reader as ImageReader;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Cache entries at or below this size are interface assets rather than
/// wallpapers and are never staged.
pub const MIN_SIZE_KIB: u64 = 300;

/// Outcome of a single extraction run.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Source filenames processed for the first time by this run.
    pub new_files: HashSet<String>,
    pub horizontal: usize,
    pub vertical: usize,
    /// Staged files whose dimensions matched neither wallpaper resolution.
    pub unclassified: usize,
}

/// Counts the immediate entries of the source directory, for sizing the
/// progress bar before a run.
pub fn count_source_entries(source_dir: &Path) -> u64 {
    WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .count() as u64
}

/// Performs one full extraction run.
///
/// Creates the destination layout if missing, loads the history, stages
/// and classifies every qualifying cache file, appends the new names to
/// the history, and finally removes the staging directory. Any I/O or
/// decode failure aborts the run; partial progress is left in place and a
/// re-run will pick up where the history says it left off.
pub fn run(config: &ExtractorConfig, progress: &ProgressBar) -> Result<RunStats, ExtractError> {
    let staging_dir = config.staging_dir();
    for dir in [
        config.dest_root.clone(),
        staging_dir.clone(),
        config.horizontal_dir(),
        config.vertical_dir(),
    ] {
        fs::create_dir_all(&dir).map_err(|source| ExtractError::Io { source, path: dir })?;
    }

    let log_path = config.log_path();
    let seen = history::load_history(&log_path).map_err(ExtractError::History)?;

    let stats = select_and_stage(config, &seen, progress)?;

    history::append_history(&log_path, &stats.new_files).map_err(ExtractError::History)?;
    fs::remove_dir_all(&staging_dir).map_err(|source| ExtractError::Io {
        source,
        path: staging_dir,
    })?;

    Ok(stats)
}

/// Walks the immediate entries of the source directory and stages every
/// candidate: a non-directory entry larger than [`MIN_SIZE_KIB`] whose
/// name is not yet in the history.
fn select_and_stage(
    config: &ExtractorConfig,
    seen: &HashSet<String>,
    progress: &ProgressBar,
) -> Result<RunStats, ExtractError> {
    let staging_dir = config.staging_dir();
    let mut stats = RunStats::default();

    for entry in WalkDir::new(config.source_dir()).min_depth(1).max_depth(1) {
        let entry = entry.map_err(ExtractError::Walk)?;
        progress.inc(1);
        if entry.file_type().is_dir() {
            continue;
        }
        let metadata = entry.metadata().map_err(ExtractError::Walk)?;
        if metadata.len() <= MIN_SIZE_KIB * 1024 {
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ExtractError::InvalidFileName(entry.path().to_path_buf()))?
            .to_string();
        if seen.contains(&name) {
            continue;
        }

        progress.set_message(format!("Staging: {}", name));
        let staged = staging_dir.join(format!("{}.jpg", name));
        fs::copy(entry.path(), &staged).map_err(|source| ExtractError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;

        match classify_staged(&name, &staged, config)? {
            Some(Orientation::Horizontal) => stats.horizontal += 1,
            Some(Orientation::Vertical) => stats.vertical += 1,
            None => stats.unclassified += 1,
        }
        stats.new_files.insert(name);
    }

    Ok(stats)
}

/// Probes the staged copy and, when it matches one of the two wallpaper
/// resolutions, moves it into the corresponding destination directory.
///
/// The destination name appends `.jpg` to the staged name, yielding
/// `<original>.jpg.jpg`; the doubled suffix is what earlier versions of
/// this tool produced and existing archives carry it.
fn classify_staged(
    name: &str,
    staged: &Path,
    config: &ExtractorConfig,
) -> Result<Option<Orientation>, ExtractError> {
    let (width, height) = probe_dimensions(staged)?;
    let orientation = classify_dimensions(width, height);
    if let Some(orientation) = orientation {
        let target_dir = match orientation {
            Orientation::Horizontal => config.horizontal_dir(),
            Orientation::Vertical => config.vertical_dir(),
        };
        let destination = target_dir.join(format!("{}.jpg.jpg", name));
        fs::rename(staged, &destination).map_err(|source| ExtractError::Io {
            source,
            path: staged.to_path_buf(),
        })?;
    }
    Ok(orientation)
}

/// Reads the pixel dimensions of a staged file.
///
/// Cache files carry no meaningful extension, so the format is sniffed
/// from the file contents rather than the staged `.jpg` suffix.
fn probe_dimensions(path: &Path) -> Result<(u32, u32), ExtractError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| ExtractError::Io {
            source,
            path: path.to_path_buf(),
        })?;
    reader.into_dimensions().map_err(|source| ExtractError::Image {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Debug)]
pub enum ExtractError {
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    Image {
        source: image::ImageError,
        path: PathBuf,
    },
    Walk(walkdir::Error),
    History(HistoryError),
    InvalidFileName(PathBuf),
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { source, path } => write!(f, "io error for {}: {}", path.display(), source),
            Self::Image { source, path } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
            Self::Walk(error) => write!(f, "failed to read source directory: {}", error),
            Self::History(error) => write!(f, "{}", error),
            Self::InvalidFileName(path) => {
                write!(f, "file name is not valid UTF-8: {}", path.display())
            }
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Walk(error) => Some(error),
            Self::History(error) => Some(error),
            Self::InvalidFileName(_) => None,
        }
    }
}
