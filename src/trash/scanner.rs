use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

use super::category::{self, ScannedFile, TrashCategory};
use super::matcher;
use super::{CleanState, ScanState, TrashScanResults};
use crate::cleaner::engine::{self, CleanEntry, CleanMode, CleanReport};
use crate::common::config::Config;
use crate::common::format;

/// Where the trash scan looks by default: the user cache directory,
/// the system temp directory, downloads, and a thumbnail directory
/// under the pictures folder when one exists.
pub fn default_scan_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(cache) = dirs::cache_dir() {
        roots.push(cache);
    }
    roots.push(std::env::temp_dir());
    if let Some(downloads) = dirs::download_dir() {
        roots.push(downloads);
    }
    if let Some(pictures) = dirs::picture_dir() {
        let thumbs = pictures.join(".thumbnails");
        if thumbs.exists() {
            roots.push(thumbs);
        }
    }
    roots
}

/// Expand `~` and glob patterns in configured root entries
pub fn expand_roots(patterns: &[String]) -> Vec<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
    let mut expanded = Vec::new();

    for pattern in patterns {
        let resolved = pattern.replace('~', &home.to_string_lossy());
        if resolved.contains('*') {
            if let Ok(entries) = glob::glob(&resolved) {
                expanded.extend(entries.filter_map(|e| e.ok()));
            }
        } else {
            expanded.push(PathBuf::from(resolved));
        }
    }

    expanded
}

/// Resolve the full root list for a scan: defaults plus configured
/// roots, deduplicated, keeping only readable directories.
/// Returns the usable roots and messages for the skipped ones.
pub fn scan_roots(config: &Config) -> (Vec<PathBuf>, Vec<String>) {
    let mut candidates = default_scan_roots();
    candidates.extend(expand_roots(&config.scan_roots));

    let mut seen = std::collections::HashSet::new();
    let mut roots = Vec::new();
    let mut skipped = Vec::new();

    for root in candidates {
        if !seen.insert(root.clone()) {
            continue;
        }
        if !root.is_dir() {
            skipped.push(format!("Skipped missing root: {}", root.display()));
            continue;
        }
        if std::fs::read_dir(&root).is_err() {
            skipped.push(format!("Skipped unreadable root: {}", root.display()));
            continue;
        }
        roots.push(root);
    }

    (roots, skipped)
}

/// Run a full trash scan over the configured roots
pub fn scan<F>(config: &Config, mut on_state: F) -> TrashScanResults
where
    F: FnMut(&ScanState),
{
    let (roots, skipped) = scan_roots(config);
    for msg in &skipped {
        warn!("{msg}");
    }
    let mut results = scan_paths(&roots, config, &mut on_state);
    results.errors.extend(skipped);
    results
}

/// Scan an explicit set of roots. Each root is walked to the
/// configured depth; state transitions are emitted per root.
pub fn scan_paths<F>(roots: &[PathBuf], config: &Config, mut on_state: F) -> TrashScanResults
where
    F: FnMut(&ScanState),
{
    let start = Instant::now();
    let mut results = TrashScanResults::new();
    results.roots = roots.to_vec();

    on_state(&ScanState::Idle);

    if roots.is_empty() {
        on_state(&ScanState::Completed {
            total_bytes: 0,
            total_files: 0,
        });
        results.duration_secs = start.elapsed().as_secs_f64();
        return results;
    }

    let mut bytes_found = 0u64;
    for root in roots {
        on_state(&ScanState::Scanning {
            current: format::format_path(root),
            bytes_found,
        });

        let before = results.files.len();
        walk_directory(root, 0, config.max_scan_depth, config, &mut results.files);
        bytes_found = results.files.iter().map(|f| f.size_bytes).sum();

        debug!(
            root = %root.display(),
            found = results.files.len() - before,
            "root scanned"
        );
        on_state(&ScanState::Progress {
            files_found: results.files.len(),
            bytes_found,
        });
    }

    results.recalculate();
    results.duration_secs = start.elapsed().as_secs_f64();
    on_state(&ScanState::Completed {
        total_bytes: results.total_bytes,
        total_files: results.total_files,
    });

    results
}

/// Walk one directory level. Files go through the trash matcher and
/// the categorizer; subdirectories are entered while the depth bound
/// allows, except recognized trash folders which are swept with their
/// own bound. Unreadable entries are logged and skipped.
fn walk_directory(
    dir: &Path,
    depth: u32,
    max_depth: u32,
    config: &Config,
    out: &mut Vec<ScannedFile>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if config.is_excluded(&path) {
            continue;
        }
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot stat entry");
                continue;
            }
        };
        // Symlinks are never followed
        if file_type.is_symlink() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_file() {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let path_str = path.to_string_lossy().to_string();
            let category = if matcher::is_trash_file(&name, &path_str) {
                // Trash without a better home lands in Other
                Some(category::categorize(&name, &path_str, size).unwrap_or(TrashCategory::Other))
            } else {
                category::categorize(&name, &path_str, size)
            };
            if let Some(category) = category {
                out.push(ScannedFile {
                    name,
                    path,
                    size_bytes: size,
                    category,
                    selected: false,
                });
            }
        } else if file_type.is_dir() {
            if matcher::is_trash_dir(&name) {
                collect_trash_directory(&path, 0, max_depth, config, out);
            } else if depth + 1 < max_depth {
                walk_directory(&path, depth + 1, max_depth, config, out);
            }
        }
    }
}

/// Sweep a recognized trash folder: every file inside is collected,
/// with Other as the fallback category.
fn collect_trash_directory(
    dir: &Path,
    depth: u32,
    max_depth: u32,
    config: &Config,
    out: &mut Vec<ScannedFile>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read trash directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if config.is_excluded(&path) {
            continue;
        }
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if file_type.is_symlink() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_file() {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let path_str = path.to_string_lossy().to_string();
            let category =
                category::categorize(&name, &path_str, size).unwrap_or(TrashCategory::Other);
            out.push(ScannedFile {
                name,
                path,
                size_bytes: size,
                category,
                selected: false,
            });
        } else if file_type.is_dir() && depth + 1 < max_depth {
            collect_trash_directory(&path, depth + 1, max_depth, config, out);
        }
    }
}

/// Delete a set of flagged files, emitting CleanState transitions
pub fn delete_selected<F>(
    files: &[ScannedFile],
    mode: CleanMode,
    mut on_state: F,
) -> Result<CleanReport>
where
    F: FnMut(&CleanState),
{
    on_state(&CleanState::Idle);

    let entries: Vec<CleanEntry> = files
        .iter()
        .map(|f| CleanEntry {
            path: f.path.clone(),
            size_bytes: f.size_bytes,
        })
        .collect();

    on_state(&CleanState::Cleaning {
        done: 0,
        total: entries.len(),
    });

    match engine::clean(&entries, mode, |done, total| {
        on_state(&CleanState::Cleaning { done, total })
    }) {
        Ok(report) => {
            on_state(&CleanState::Completed {
                deleted_count: report.files_removed,
                deleted_bytes: report.bytes_freed,
            });
            Ok(report)
        }
        Err(e) => {
            on_state(&CleanState::Error(e.to_string()));
            Err(e)
        }
    }
}
