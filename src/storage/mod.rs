use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Capacity of the filesystem holding the user's data
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StorageInfo {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl StorageInfo {
    pub fn used_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.used as f64 / self.total as f64) * 100.0) as u32
    }
}

/// Size of one directory in the breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Complete storage overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageOverview {
    pub info: StorageInfo,
    pub entries: Vec<UsageEntry>,
}

/// Read capacity of the filesystem at `mount` via `df`
pub fn storage_info(mount: &str) -> StorageInfo {
    let output = std::process::Command::new("df").args(["-k", mount]).output();

    if let Ok(out) = output {
        let stdout = String::from_utf8_lossy(&out.stdout);
        // Second line: filesystem 1K-blocks used available capacity ...
        if let Some(line) = stdout.lines().nth(1) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 4 {
                let total = parts[1].parse::<u64>().unwrap_or(0) * 1024;
                let available = parts[3].parse::<u64>().unwrap_or(0) * 1024;
                return StorageInfo {
                    total,
                    used: total.saturating_sub(available),
                    available,
                };
            }
        }
    }

    StorageInfo {
        total: 0,
        used: 0,
        available: 0,
    }
}

/// Total size of a directory tree (logical bytes, symlinks not followed)
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}

/// Analyze the home filesystem and the standard user directories,
/// sorted by size descending.
pub fn analyze() -> StorageOverview {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
    let info = storage_info(&home.to_string_lossy());

    let candidates: Vec<(&str, Option<PathBuf>)> = vec![
        ("Documents", dirs::document_dir()),
        ("Downloads", dirs::download_dir()),
        ("Pictures", dirs::picture_dir()),
        ("Music", dirs::audio_dir()),
        ("Videos", dirs::video_dir()),
        ("Desktop", dirs::desktop_dir()),
        ("Cache", dirs::cache_dir()),
    ];

    let mut entries = Vec::new();
    for (name, path) in candidates {
        let Some(path) = path else { continue };
        if !path.is_dir() {
            continue;
        }
        let size = dir_size(&path);
        if size > 0 {
            entries.push(UsageEntry {
                name: name.to_string(),
                path,
                size,
            });
        }
    }

    entries.sort_by(|a, b| b.size.cmp(&a.size));

    StorageOverview { info, entries }
}
