use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::common::errors::SweepError;
use crate::common::safety;

/// Clean mode determines whether files are actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Report what would be done without touching anything
    DryRun,
    /// Remove files permanently
    Delete,
}

impl std::fmt::Display for CleanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanMode::DryRun => write!(f, "dry_run"),
            CleanMode::Delete => write!(f, "delete"),
        }
    }
}

/// A single path scheduled for removal
#[derive(Debug, Clone)]
pub struct CleanEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Report from a clean operation
#[derive(Debug)]
pub struct CleanReport {
    pub mode: CleanMode,
    pub files_removed: usize,
    pub bytes_freed: u64,
    pub errors: Vec<String>,
}

/// Remove the given entries and report how much space was reclaimed.
///
/// Every entry is checked against the protected-path list before any
/// removal happens; a single protected path aborts the whole
/// operation. Individual removal failures are recorded and skipped.
/// `on_progress` is called after each entry with (done, total).
pub fn clean<F>(entries: &[CleanEntry], mode: CleanMode, mut on_progress: F) -> Result<CleanReport>
where
    F: FnMut(usize, usize),
{
    for entry in entries {
        if safety::is_protected(&entry.path) {
            return Err(SweepError::Protected {
                path: entry.path.clone(),
            }
            .into());
        }
    }

    if mode == CleanMode::DryRun {
        return Ok(CleanReport {
            mode,
            files_removed: entries.len(),
            bytes_freed: entries.iter().map(|e| e.size_bytes).sum(),
            errors: Vec::new(),
        });
    }

    let total = entries.len();
    let mut report = CleanReport {
        mode,
        files_removed: 0,
        bytes_freed: 0,
        errors: Vec::new(),
    };

    for (index, entry) in entries.iter().enumerate() {
        match remove_path(&entry.path) {
            Ok(()) => {
                report.files_removed += 1;
                report.bytes_freed += entry.size_bytes;
            }
            Err(e) => {
                warn!(path = %entry.path.display(), error = %e, "failed to remove");
                report.errors.push(format!(
                    "Failed to remove '{}': {}",
                    entry.path.display(),
                    e
                ));
            }
        }
        on_progress(index + 1, total);
    }

    Ok(report)
}

/// Delete a single file or directory. Paths that are already gone
/// count as removed.
pub fn remove_path(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}
