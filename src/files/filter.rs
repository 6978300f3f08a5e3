use chrono::{Duration, Utc};

use super::{FileItem, FileKind};

/// Canonical "larger than" steps offered by the UI, in MB
pub const SIZE_STEPS_MB: &[u64] = &[1, 5, 10, 20, 50, 100, 200, 500];

/// Canonical "modified within" steps offered by the UI, in days
pub const AGE_STEPS_DAYS: &[u32] = &[1, 7, 30, 90, 180];

/// Conjunctive filter over the file inventory.
/// An unset field matches everything.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Only this kind
    pub kind: Option<FileKind>,
    /// Only files strictly larger than this
    pub min_size_bytes: Option<u64>,
    /// Only files modified within the last N days
    pub within_days: Option<u32>,
}

impl FileFilter {
    pub fn matches(&self, item: &FileItem) -> bool {
        let kind_ok = self.kind.map_or(true, |k| item.kind == k);
        let size_ok = self.min_size_bytes.map_or(true, |s| item.size_bytes > s);
        let time_ok = self
            .within_days
            .map_or(true, |d| item.modified > Utc::now() - Duration::days(d as i64));
        kind_ok && size_ok && time_ok
    }

    pub fn apply<'a>(&self, items: &'a [FileItem]) -> Vec<&'a FileItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.min_size_bytes.is_none() && self.within_days.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn item(name: &str, kind: FileKind, size: u64, age_days: i64) -> FileItem {
        FileItem {
            name: name.to_string(),
            path: PathBuf::from("/x").join(name),
            size_bytes: size,
            kind,
            modified: Utc::now() - Duration::days(age_days),
            selected: false,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FileFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&item("a.jpg", FileKind::Image, 10, 400)));
    }

    #[test]
    fn test_kind_filter() {
        let filter = FileFilter {
            kind: Some(FileKind::Video),
            ..FileFilter::default()
        };
        assert!(filter.matches(&item("m.mp4", FileKind::Video, 10, 0)));
        assert!(!filter.matches(&item("a.jpg", FileKind::Image, 10, 0)));
    }

    #[test]
    fn test_size_filter_is_strict() {
        let filter = FileFilter {
            min_size_bytes: Some(1 << 20),
            ..FileFilter::default()
        };
        assert!(!filter.matches(&item("small", FileKind::Image, 1 << 20, 0)));
        assert!(filter.matches(&item("big", FileKind::Image, (1 << 20) + 1, 0)));
    }

    #[test]
    fn test_age_filter() {
        let filter = FileFilter {
            within_days: Some(7),
            ..FileFilter::default()
        };
        assert!(filter.matches(&item("new", FileKind::Documents, 10, 2)));
        assert!(!filter.matches(&item("old", FileKind::Documents, 10, 30)));
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let filter = FileFilter {
            kind: Some(FileKind::Archive),
            min_size_bytes: Some(100),
            within_days: Some(30),
        };
        assert!(filter.matches(&item("a.zip", FileKind::Archive, 200, 5)));
        assert!(!filter.matches(&item("b.zip", FileKind::Archive, 50, 5)));
        assert!(!filter.matches(&item("c.zip", FileKind::Archive, 200, 60)));
        assert!(!filter.matches(&item("d.pdf", FileKind::Documents, 200, 5)));
    }

    #[test]
    fn test_canonical_steps_are_ascending() {
        assert!(SIZE_STEPS_MB.windows(2).all(|w| w[0] < w[1]));
        assert!(AGE_STEPS_DAYS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_apply_preserves_order() {
        let items = vec![
            item("a.zip", FileKind::Archive, 200, 1),
            item("b.pdf", FileKind::Documents, 200, 1),
            item("c.zip", FileKind::Archive, 300, 1),
        ];
        let filter = FileFilter {
            kind: Some(FileKind::Archive),
            ..FileFilter::default()
        };
        let matched = filter.apply(&items);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].name, "a.zip");
        assert_eq!(matched[1].name, "c.zip");
    }
}
