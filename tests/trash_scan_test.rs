use std::path::PathBuf;
use tempfile::TempDir;

use cleansweep::cleaner::CleanMode;
use cleansweep::common::config::Config;
use cleansweep::trash::scanner::{expand_roots, scan_paths};
use cleansweep::trash::{delete_selected, CleanState, ScanState, TrashCategory};

fn write(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ─── Root expansion ───────────────────────────────────────────────────────────

#[test]
fn test_expand_roots_tilde() {
    let expanded = expand_roots(&["~/Documents".to_string()]);
    assert_eq!(expanded.len(), 1);
    assert!(
        !expanded[0].to_string_lossy().contains('~'),
        "Tilde should be expanded"
    );
    if let Some(home) = dirs::home_dir() {
        assert!(expanded[0].starts_with(&home));
    }
}

#[test]
fn test_expand_roots_glob() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("alpha")).unwrap();
    std::fs::create_dir(dir.path().join("beta")).unwrap();

    let pattern = format!("{}/*", dir.path().display());
    let expanded = expand_roots(&[pattern]);
    assert_eq!(expanded.len(), 2);
}

// ─── Classification during the walk ───────────────────────────────────────────

#[test]
fn test_scan_flags_trash_and_skips_clean_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app.log", "log line");
    write(dir.path(), "upload.tmp", "partial");
    write(dir.path(), "config.bak", "backup");
    write(dir.path(), "notes.md", "keep me");
    write(dir.path(), "report.pdf", "keep me too");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let names: Vec<&str> = results.files.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"app.log"));
    assert!(names.contains(&"upload.tmp"));
    assert!(names.contains(&"config.bak"));
    assert!(!names.contains(&"notes.md"));
    assert!(!names.contains(&"report.pdf"));

    assert_eq!(results.total_files, 3);
    assert_eq!(
        results.total_bytes,
        results.files.iter().map(|f| f.size_bytes).sum::<u64>()
    );
}

#[test]
fn test_scan_categorizes_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app.log", "x");
    write(dir.path(), "upload.tmp", "x");
    write(dir.path(), "bundle.apk", "x");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let category_of = |name: &str| {
        results
            .files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.category)
    };
    assert_eq!(category_of("app.log"), Some(TrashCategory::LogFiles));
    assert_eq!(category_of("upload.tmp"), Some(TrashCategory::TempFiles));
    assert_eq!(category_of("bundle.apk"), Some(TrashCategory::PackageFiles));
}

#[test]
fn test_trash_directory_contents_are_swept() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    std::fs::create_dir(&cache).unwrap();
    // Random blobs with no recognizable extension
    write(&cache, "f91a2c", "blob");
    write(&cache, "77bd01", "blob");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    assert_eq!(results.total_files, 2);
    // The /cache/ path pattern puts these in AppCache
    assert!(results
        .files
        .iter()
        .all(|f| f.category == TrashCategory::AppCache));
}

#[test]
fn test_depth_bound_stops_descent() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    let deeper = sub.join("deeper");
    std::fs::create_dir_all(&deeper).unwrap();

    write(dir.path(), "root.log", "x");
    write(&sub, "mid.log", "x");
    write(&deeper, "deep.log", "x");

    let config = Config::default();
    assert_eq!(config.max_scan_depth, 2);
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let names: Vec<&str> = results.files.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"root.log"));
    assert!(names.contains(&"mid.log"));
    assert!(
        !names.contains(&"deep.log"),
        "files below the depth bound must not be reported"
    );
}

#[test]
fn test_trash_directory_found_below_depth_bound_is_still_swept() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    let cache = sub.join("cache");
    let inner = cache.join("inner");
    std::fs::create_dir_all(&inner).unwrap();

    write(&cache, "blob", "x");
    write(&inner, "nested-blob", "x");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let names: Vec<&str> = results.files.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"blob"));
    assert!(
        names.contains(&"nested-blob"),
        "trash folders get their own depth budget"
    );
}

#[test]
fn test_excluded_paths_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "keep.log", "x");
    write(dir.path(), "skipme.log", "x");

    let config = Config {
        exclude_paths: vec!["skipme".to_string()],
        ..Config::default()
    };
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let names: Vec<&str> = results.files.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"keep.log"));
    assert!(!names.contains(&"skipme.log"));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_followed() {
    let dir = TempDir::new().unwrap();
    let target = write(dir.path(), "real.log", "x");
    std::os::unix::fs::symlink(&target, dir.path().join("link.log")).unwrap();

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    assert_eq!(results.total_files, 1, "the symlink itself is not reported");
}

#[test]
fn test_missing_root_produces_empty_results() {
    let config = Config::default();
    let results = scan_paths(
        &[PathBuf::from("/nonexistent/path/xyz")],
        &config,
        |_| {},
    );
    assert_eq!(results.total_files, 0);
    assert_eq!(results.total_bytes, 0);
}

// ─── State transitions ────────────────────────────────────────────────────────

#[test]
fn test_scan_state_sequence() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.log", "x");

    let mut states = Vec::new();
    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |state| {
        states.push(state.clone());
    });

    assert_eq!(states.first(), Some(&ScanState::Idle));
    assert!(matches!(states[1], ScanState::Scanning { .. }));
    assert!(states
        .iter()
        .any(|s| matches!(s, ScanState::Progress { .. })));
    assert_eq!(
        states.last(),
        Some(&ScanState::Completed {
            total_bytes: results.total_bytes,
            total_files: results.total_files,
        })
    );
}

#[test]
fn test_empty_root_list_completes_immediately() {
    let mut states = Vec::new();
    let config = Config::default();
    scan_paths(&[], &config, |state| states.push(state.clone()));

    assert_eq!(
        states,
        vec![
            ScanState::Idle,
            ScanState::Completed {
                total_bytes: 0,
                total_files: 0
            }
        ]
    );
}

// ─── Deletion ─────────────────────────────────────────────────────────────────

#[test]
fn test_delete_selected_removes_files_and_reports() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.log", "aaaa");
    write(dir.path(), "b.tmp", "bb");
    write(dir.path(), "notes.md", "keep");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});
    assert_eq!(results.total_files, 2);

    let mut states = Vec::new();
    let report = delete_selected(&results.files, CleanMode::Delete, |state| {
        states.push(state.clone());
    })
    .unwrap();

    assert_eq!(report.files_removed, 2);
    assert_eq!(report.bytes_freed, 6);
    assert!(!dir.path().join("a.log").exists());
    assert!(!dir.path().join("b.tmp").exists());
    assert!(dir.path().join("notes.md").exists());

    assert_eq!(states.first(), Some(&CleanState::Idle));
    assert!(states
        .iter()
        .any(|s| matches!(s, CleanState::Cleaning { .. })));
    assert_eq!(
        states.last(),
        Some(&CleanState::Completed {
            deleted_count: 2,
            deleted_bytes: 6,
        })
    );
}

#[test]
fn test_delete_selected_dry_run_keeps_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.log", "aaaa");

    let config = Config::default();
    let results = scan_paths(&[dir.path().to_path_buf()], &config, |_| {});

    let report = delete_selected(&results.files, CleanMode::DryRun, |_| {}).unwrap();
    assert_eq!(report.files_removed, 1);
    assert!(dir.path().join("a.log").exists());
}
