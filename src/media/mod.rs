use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::cleaner::engine::{self, CleanEntry, CleanMode, CleanReport};
use crate::common::config::Config;
use crate::files::FileKind;
use crate::trash::scanner::expand_roots;

/// A picture found by the media scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureItem {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub taken: DateTime<Utc>,
    #[serde(default)]
    pub selected: bool,
}

/// Pictures taken on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureGroup {
    /// Local date key, YYYY-MM-DD
    pub date: String,
    pub pictures: Vec<PictureItem>,
    #[serde(default)]
    pub selected: bool,
}

impl PictureGroup {
    pub fn total_size(&self) -> u64 {
        self.pictures.iter().map(|p| p.size_bytes).sum()
    }

    pub fn selected_count(&self) -> usize {
        self.pictures.iter().filter(|p| p.selected).count()
    }

    pub fn selected_size(&self) -> u64 {
        self.pictures
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.size_bytes)
            .sum()
    }

    /// Flip the whole group; every picture follows the group state
    pub fn toggle_all(&mut self) {
        self.selected = !self.selected;
        for picture in &mut self.pictures {
            picture.selected = self.selected;
        }
    }

    /// Flip one picture; the group flag tracks "all selected"
    pub fn toggle_picture(&mut self, index: usize) {
        if index >= self.pictures.len() {
            return;
        }
        self.pictures[index].selected = !self.pictures[index].selected;
        self.selected = !self.pictures.is_empty() && self.pictures.iter().all(|p| p.selected);
    }
}

/// Derived selection totals over all groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionInfo {
    pub selected_count: usize,
    pub selected_bytes: u64,
    pub total_pictures: usize,
    pub all_selected: bool,
}

/// Compute selection totals from the group list
pub fn selection_info(groups: &[PictureGroup]) -> SelectionInfo {
    let mut selected_count = 0;
    let mut selected_bytes = 0;
    let mut total_pictures = 0;

    for group in groups {
        total_pictures += group.pictures.len();
        for picture in &group.pictures {
            if picture.selected {
                selected_count += 1;
                selected_bytes += picture.size_bytes;
            }
        }
    }

    SelectionInfo {
        selected_count,
        selected_bytes,
        total_pictures,
        all_selected: total_pictures > 0 && selected_count == total_pictures,
    }
}

/// Select or deselect every picture in every group
pub fn select_all(groups: &mut [PictureGroup], selected: bool) {
    for group in groups {
        group.selected = selected;
        for picture in &mut group.pictures {
            picture.selected = selected;
        }
    }
}

/// Every selected picture across all groups
pub fn selected_pictures(groups: &[PictureGroup]) -> Vec<&PictureItem> {
    groups
        .iter()
        .flat_map(|g| g.pictures.iter())
        .filter(|p| p.selected)
        .collect()
}

/// Scan the media roots for pictures, grouped by calendar date.
/// Groups come back newest first, as does each group's contents.
/// `on_progress` receives (current, total).
pub fn scan_pictures<F>(config: &Config, mut on_progress: F) -> Result<Vec<PictureGroup>>
where
    F: FnMut(usize, usize),
{
    let roots = picture_roots(config);

    // First pass: collect candidate paths so progress has a total
    let mut candidates: Vec<PathBuf> = Vec::new();
    for root in &roots {
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
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
            if FileKind::Image.extensions().contains(&ext.as_str()) {
                candidates.push(path.to_path_buf());
            }
        }
    }

    // Second pass: stat and group by local date
    let total = candidates.len();
    let mut by_date: BTreeMap<String, Vec<PictureItem>> = BTreeMap::new();

    for (index, path) in candidates.iter().enumerate() {
        on_progress(index + 1, total);

        let Ok(metadata) = std::fs::metadata(path) else {
            continue;
        };
        if metadata.len() <= FileKind::Image.min_size_bytes() {
            continue;
        }
        let taken: DateTime<Utc> = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        let date_key = taken
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        by_date.entry(date_key).or_default().push(PictureItem {
            name,
            path: path.clone(),
            size_bytes: metadata.len(),
            taken,
            selected: false,
        });
    }

    // Newest date first; newest picture first within each group
    let mut groups: Vec<PictureGroup> = by_date
        .into_iter()
        .rev()
        .map(|(date, mut pictures)| {
            pictures.sort_by(|a, b| b.taken.cmp(&a.taken));
            PictureGroup {
                date,
                pictures,
                selected: false,
            }
        })
        .collect();

    groups.retain(|g| !g.pictures.is_empty());
    Ok(groups)
}

/// Roots for the picture scan: configured media roots, or the
/// platform pictures/videos directories when none are set.
fn picture_roots(config: &Config) -> Vec<PathBuf> {
    expand_roots(&config.effective_media_roots())
        .into_iter()
        .filter(|p| p.is_dir())
        .collect()
}

/// Delete the given pictures, returning the clean report
pub fn delete_pictures<F>(
    pictures: &[&PictureItem],
    mode: CleanMode,
    on_progress: F,
) -> Result<CleanReport>
where
    F: FnMut(usize, usize),
{
    let entries: Vec<CleanEntry> = pictures
        .iter()
        .map(|p| CleanEntry {
            path: p.path.clone(),
            size_bytes: p.size_bytes,
        })
        .collect();
    engine::clean(&entries, mode, on_progress)
}

/// Find a group by its date key
pub fn group_by_date<'a>(groups: &'a mut [PictureGroup], date: &str) -> Option<&'a mut PictureGroup> {
    groups.iter_mut().find(|g| g.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::Path;

    fn picture(name: &str, size: u64, day: u32) -> PictureItem {
        PictureItem {
            name: name.to_string(),
            path: Path::new("/pics").join(name),
            size_bytes: size,
            taken: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
            selected: false,
        }
    }

    fn group(date: &str, pictures: Vec<PictureItem>) -> PictureGroup {
        PictureGroup {
            date: date.to_string(),
            pictures,
            selected: false,
        }
    }

    #[test]
    fn test_group_toggle_all() {
        let mut g = group("2024-06-01", vec![picture("a.jpg", 10, 1), picture("b.jpg", 20, 1)]);
        g.toggle_all();
        assert!(g.selected);
        assert_eq!(g.selected_count(), 2);
        assert_eq!(g.selected_size(), 30);
        g.toggle_all();
        assert_eq!(g.selected_count(), 0);
    }

    #[test]
    fn test_toggle_picture_tracks_group_flag() {
        let mut g = group("2024-06-01", vec![picture("a.jpg", 10, 1), picture("b.jpg", 20, 1)]);
        g.toggle_picture(0);
        assert!(!g.selected);
        g.toggle_picture(1);
        assert!(g.selected);
        g.toggle_picture(0);
        assert!(!g.selected);
        assert_eq!(g.selected_size(), 20);
    }

    #[test]
    fn test_selection_info_derived() {
        let mut groups = vec![
            group("2024-06-02", vec![picture("a.jpg", 10, 2)]),
            group("2024-06-01", vec![picture("b.jpg", 20, 1), picture("c.jpg", 30, 1)]),
        ];

        let info = selection_info(&groups);
        assert_eq!(info.selected_count, 0);
        assert_eq!(info.total_pictures, 3);
        assert!(!info.all_selected);

        select_all(&mut groups, true);
        let info = selection_info(&groups);
        assert_eq!(info.selected_count, 3);
        assert_eq!(info.selected_bytes, 60);
        assert!(info.all_selected);

        groups[1].toggle_picture(0);
        let info = selection_info(&groups);
        assert_eq!(info.selected_count, 2);
        assert!(!info.all_selected);
    }

    #[test]
    fn test_selected_pictures_flattens_groups() {
        let mut groups = vec![
            group("2024-06-02", vec![picture("a.jpg", 10, 2)]),
            group("2024-06-01", vec![picture("b.jpg", 20, 1)]),
        ];
        groups[0].toggle_all();
        let selected = selected_pictures(&groups);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "a.jpg");
    }
}
