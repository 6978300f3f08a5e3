use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files larger than this inside a download directory are flagged
/// as cleanable even without a matching pattern.
const LARGE_DOWNLOAD_BYTES: u64 = 10 << 20;

/// Trash report categories, checked in declaration order.
/// The first category that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrashCategory {
    AppCache,
    PackageFiles,
    LogFiles,
    TempFiles,
    Other,
}

impl TrashCategory {
    pub const ALL: [TrashCategory; 5] = [
        TrashCategory::AppCache,
        TrashCategory::PackageFiles,
        TrashCategory::LogFiles,
        TrashCategory::TempFiles,
        TrashCategory::Other,
    ];

    /// Substrings matched against the lowercased file name
    fn name_patterns(&self) -> &'static [&'static str] {
        match self {
            TrashCategory::AppCache => &[".cache", ".dex"],
            TrashCategory::PackageFiles => &[".apk", ".xapk", ".apks"],
            TrashCategory::LogFiles => &[".log", ".crash"],
            TrashCategory::TempFiles => &[".tmp", ".temp"],
            TrashCategory::Other => &[".bak", ".old", ".swp", ".swo"],
        }
    }

    /// Substrings matched against the lowercased full path
    fn path_patterns(&self) -> &'static [&'static str] {
        match self {
            TrashCategory::AppCache => &["/cache/", "/app_cache/", "/webview/"],
            TrashCategory::PackageFiles => &[],
            TrashCategory::LogFiles => &["/logs/"],
            TrashCategory::TempFiles => &["/temp/", "/.temp", "/temporary/", "/.thumbnails/"],
            TrashCategory::Other => &["/trash/", "/recycle/"],
        }
    }

    /// Category-specific rules that substring tables cannot express
    fn matches_special(&self, name: &str, path: &str, size: u64) -> bool {
        match self {
            TrashCategory::AppCache => {
                name.contains("cache") || (name.ends_with(".dex") && path.contains("cache"))
            }
            TrashCategory::LogFiles => {
                (name.ends_with(".txt") && (path.contains("log") || name.contains("log")))
                    || name.starts_with("log")
            }
            TrashCategory::TempFiles => name.starts_with("tmp") || name.starts_with("temp"),
            TrashCategory::Other => {
                name.starts_with('~')
                    || name.contains("backup")
                    || (name.starts_with('.') && name.len() > 10)
                    || (size > LARGE_DOWNLOAD_BYTES && path.contains("/download"))
            }
            TrashCategory::PackageFiles => false,
        }
    }

    fn matches(&self, name: &str, path: &str, size: u64) -> bool {
        self.name_patterns().iter().any(|p| name.contains(p))
            || self.path_patterns().iter().any(|p| path.contains(p))
            || self.matches_special(name, path, size)
    }
}

impl std::fmt::Display for TrashCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrashCategory::AppCache => write!(f, "App Cache"),
            TrashCategory::PackageFiles => write!(f, "Package Files"),
            TrashCategory::LogFiles => write!(f, "Log Files"),
            TrashCategory::TempFiles => write!(f, "Temp Files"),
            TrashCategory::Other => write!(f, "Other"),
        }
    }
}

/// Classify a file by name, path, and size.
/// Returns the first category that matches, or None.
pub fn categorize(name: &str, path: &str, size: u64) -> Option<TrashCategory> {
    let name = name.to_lowercase();
    let path = path.to_lowercase();
    TrashCategory::ALL
        .iter()
        .copied()
        .find(|c| c.matches(&name, &path, size))
}

/// A single file flagged by the trash scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedFile {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub category: TrashCategory,
    #[serde(default)]
    pub selected: bool,
}

/// Files of one category with selection and display state.
///
/// Selection counts and sizes are always derived from the file list;
/// the group flag only caches "every file is selected".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: TrashCategory,
    pub files: Vec<ScannedFile>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub expanded: bool,
}

impl CategoryGroup {
    pub fn new(category: TrashCategory) -> Self {
        Self {
            category,
            files: Vec::new(),
            selected: false,
            expanded: false,
        }
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    pub fn selected_files(&self) -> Vec<&ScannedFile> {
        self.files.iter().filter(|f| f.selected).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.files.iter().filter(|f| f.selected).count()
    }

    pub fn selected_size(&self) -> u64 {
        self.files
            .iter()
            .filter(|f| f.selected)
            .map(|f| f.size_bytes)
            .sum()
    }

    pub fn toggle_expansion(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Flip the whole group: every file follows the new group state
    pub fn toggle_all(&mut self) {
        if !self.has_files() {
            return;
        }
        self.selected = !self.selected;
        for file in &mut self.files {
            file.selected = self.selected;
        }
    }

    /// Flip one file. The group counts as selected only when every
    /// file is selected and there is at least one file.
    pub fn toggle_file(&mut self, index: usize) {
        if index >= self.files.len() {
            return;
        }
        self.files[index].selected = !self.files[index].selected;
        let all = self.files.iter().all(|f| f.selected);
        let any = self.files.iter().any(|f| f.selected);
        self.selected = all && any;
    }
}

/// Build one group per category, in category order, from a flat list
pub fn group_by_category(files: &[ScannedFile]) -> Vec<CategoryGroup> {
    TrashCategory::ALL
        .iter()
        .map(|&category| {
            let mut group = CategoryGroup::new(category);
            group.files = files
                .iter()
                .filter(|f| f.category == category)
                .cloned()
                .collect();
            group
        })
        .collect()
}
