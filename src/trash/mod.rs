pub mod category;
pub mod matcher;
pub mod scanner;

pub use category::{group_by_category, CategoryGroup, ScannedFile, TrashCategory};
pub use scanner::{delete_selected, scan, scan_roots};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Observable state of a trash scan.
///
/// Emitted through the scan callback so callers can drive progress
/// display without the scanner knowing anything about terminals.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    /// A root is being walked
    Scanning { current: String, bytes_found: u64 },
    /// Running totals after each root completes
    Progress { files_found: usize, bytes_found: u64 },
    Completed { total_bytes: u64, total_files: usize },
    Error(String),
}

/// Observable state of a clean pass over selected files.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanState {
    Idle,
    Cleaning { done: usize, total: usize },
    Completed { deleted_count: usize, deleted_bytes: u64 },
    Error(String),
}

/// Complete trash scan results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashScanResults {
    /// When the scan was performed
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// How long the scan took in seconds
    pub duration_secs: f64,

    /// Roots that were walked
    pub roots: Vec<PathBuf>,

    /// Every file the classifier flagged
    pub files: Vec<ScannedFile>,

    /// Total reclaimable space in bytes
    pub total_bytes: u64,

    /// Total files found
    pub total_files: usize,

    /// Non-fatal problems encountered during the scan
    pub errors: Vec<String>,
}

impl TrashScanResults {
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            duration_secs: 0.0,
            roots: Vec::new(),
            files: Vec::new(),
            total_bytes: 0,
            total_files: 0,
            errors: Vec::new(),
        }
    }

    /// Recalculate totals from the file list
    pub fn recalculate(&mut self) {
        self.total_bytes = self.files.iter().map(|f| f.size_bytes).sum();
        self.total_files = self.files.len();
    }

    /// Group the flagged files by category, in category order
    pub fn groups(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.files)
    }
}

impl Default for TrashScanResults {
    fn default() -> Self {
        Self::new()
    }
}
