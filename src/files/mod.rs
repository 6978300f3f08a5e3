pub mod filter;

pub use filter::{FileFilter, AGE_STEPS_DAYS, SIZE_STEPS_MB};

use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::cleaner::engine::{self, CleanEntry, CleanMode, CleanReport};
use crate::common::config::Config;
use crate::trash::scanner::expand_roots;

/// Broad file kinds for the inventory scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Documents,
    Download,
    Archive,
}

impl FileKind {
    pub const ALL: [FileKind; 6] = [
        FileKind::Image,
        FileKind::Video,
        FileKind::Audio,
        FileKind::Documents,
        FileKind::Download,
        FileKind::Archive,
    ];

    /// Minimum size a file must exceed to be reported.
    /// Tiny media files are almost always thumbnails or fragments.
    pub fn min_size_bytes(&self) -> u64 {
        match self {
            FileKind::Video => 10 * 1024,
            _ => 1024,
        }
    }

    /// Extensions mapped to this kind. Download is directory-based
    /// and matches no extension.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileKind::Image => &["jpg", "jpeg", "png", "gif", "webp", "bmp", "heic"],
            FileKind::Video => &["mp4", "mkv", "avi", "mov", "webm", "m4v", "3gp"],
            FileKind::Audio => &["mp3", "wav", "ogg", "flac", "m4a", "aac", "opus"],
            FileKind::Documents => &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"],
            FileKind::Download => &[],
            FileKind::Archive => &["zip", "rar", "7z", "tar", "gz"],
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Image => write!(f, "Image"),
            FileKind::Video => write!(f, "Video"),
            FileKind::Audio => write!(f, "Audio"),
            FileKind::Documents => write!(f, "Docs"),
            FileKind::Download => write!(f, "Download"),
            FileKind::Archive => write!(f, "Zip"),
        }
    }
}

/// Map a lowercased extension to its kind
pub fn kind_for_extension(ext: &str) -> Option<FileKind> {
    FileKind::ALL
        .iter()
        .copied()
        .find(|k| k.extensions().contains(&ext))
}

/// A file found by the inventory scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileItem {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub kind: FileKind,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub selected: bool,
}

/// Results of an inventory scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileScanResults {
    pub timestamp: DateTime<Utc>,
    pub duration_secs: f64,
    pub items: Vec<FileItem>,
    pub total_bytes: u64,
}

impl FileScanResults {
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    pub fn selected_size(&self) -> u64 {
        self.items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.size_bytes)
            .sum()
    }

    /// Toggle selection of the item with the given path
    pub fn toggle(&mut self, path: &Path) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.path == path) {
            item.selected = !item.selected;
            true
        } else {
            false
        }
    }

    /// Select every item the filter matches, returning how many
    pub fn select_matching(&mut self, filter: &FileFilter) -> usize {
        let mut count = 0;
        for item in &mut self.items {
            if filter.matches(item) {
                item.selected = true;
                count += 1;
            }
        }
        count
    }

    pub fn selected_items(&self) -> Vec<&FileItem> {
        self.items.iter().filter(|i| i.selected).collect()
    }
}

/// Scan the storage roots for all file kinds.
///
/// The home directory (plus any configured media roots outside it) is
/// walked recursively, skipping hidden directories; the downloads
/// directory is additionally listed non-recursively as kind Download.
pub fn scan_all(config: &Config) -> FileScanResults {
    let start = Instant::now();

    let mut roots: Vec<PathBuf> = Vec::new();
    if let Some(home) = dirs::home_dir() {
        roots.push(home);
    }
    for root in expand_roots(&config.media_roots) {
        if root.is_dir() && !roots.iter().any(|r| root.starts_with(r)) {
            roots.push(root);
        }
    }

    let mut items = scan_paths(&roots, config);
    items.extend(scan_downloads(config));

    let total_bytes = items.iter().map(|i| i.size_bytes).sum();
    FileScanResults {
        timestamp: Utc::now(),
        duration_secs: start.elapsed().as_secs_f64(),
        items,
        total_bytes,
    }
}

/// Scan an explicit set of roots in parallel (no downloads pass)
pub fn scan_paths(roots: &[PathBuf], config: &Config) -> Vec<FileItem> {
    roots
        .par_iter()
        .map(|root| scan_root(root, config))
        .reduce(Vec::new, |mut acc, mut found| {
            acc.append(&mut found);
            acc
        })
}

/// Recursive extension scan below one root
fn scan_root(root: &Path, config: &Config) -> Vec<FileItem> {
    let mut items = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            // Hidden directories are skipped; hidden files are fine
            !(e.file_type().is_dir()
                && e.depth() > 0
                && e.file_name().to_string_lossy().starts_with('.'))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if config.is_excluded(path) {
            continue;
        }
        let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            continue;
        };
        let Some(kind) = kind_for_extension(&ext) else {
            continue;
        };
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let size = metadata.len();
        if size <= kind.min_size_bytes() {
            continue;
        }

        items.push(FileItem {
            name: entry.file_name().to_string_lossy().to_string(),
            path: path.to_path_buf(),
            size_bytes: size,
            kind,
            modified: metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now()),
            selected: false,
        });
    }

    items
}

/// List the downloads directory, non-recursively. Everything there is
/// kind Download regardless of extension.
fn scan_downloads(config: &Config) -> Vec<FileItem> {
    let Some(dir) = dirs::download_dir() else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };

    let min_size = FileKind::Download.min_size_bytes();
    let mut items = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if config.is_excluded(&path) {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() || metadata.len() <= min_size {
            continue;
        }
        items.push(FileItem {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            size_bytes: metadata.len(),
            kind: FileKind::Download,
            modified: metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now()),
            selected: false,
        });
    }

    items
}

/// Delete the given items, returning the clean report
pub fn delete_items<F>(items: &[&FileItem], mode: CleanMode, on_progress: F) -> Result<CleanReport>
where
    F: FnMut(usize, usize),
{
    let entries: Vec<CleanEntry> = items
        .iter()
        .map(|i| CleanEntry {
            path: i.path.clone(),
            size_bytes: i.size_bytes,
        })
        .collect();
    engine::clean(&entries, mode, on_progress)
}
