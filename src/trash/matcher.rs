use once_cell::sync::Lazy;
use regex::Regex;

/// Path fragments that mark a file as trash wherever they appear.
/// Mostly SDK drop zones, partial downloads, and image-loader caches.
static PATH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const SOURCES: &[&str] = &[
        r"(?i)[/\\]crashlytics([/\\]|$)",
        r"(?i)[/\\]firebase([/\\]|$)",
        r"(?i)[/\\]bugly([/\\]|$)",
        r"(?i)[/\\]umeng([/\\]|$)",
        r"(?i)[/\\]backup([/\\]|$)",
        r"(?i)[/\\]downloads?[/\\].*\.part$",
        r"(?i)[/\\]downloads?[/\\].*\.crdownload$",
        r"(?i)[/\\]downloads?[/\\].*\.tmp$",
        r"(?i)[/\\]webview([/\\]|$)",
        r"(?i)[/\\]webviewcache([/\\]|$)",
        r"(?i)[/\\]analytics([/\\]|$)",
        r"(?i)[/\\]advertising([/\\]|$)",
        r"(?i)[/\\]logfiles?([/\\]|$)",
        r"(?i)[/\\]errorlogs?([/\\]|$)",
        r"(?i)[/\\]telemetry([/\\]|$)",
        r"(?i)[/\\]thumbnails?([/\\]|$)",
        r"(?i)[/\\]imageloader([/\\]|$)",
        r"(?i)[/\\]okhttp([/\\]|$)",
        r"(?i)[/\\]picasso([/\\]|$)",
        r"(?i)[/\\]fresco([/\\]|$)",
    ];
    SOURCES
        .iter()
        .map(|s| Regex::new(s).expect("built-in pattern compiles"))
        .collect()
});

/// Extensions that are trash regardless of where the file lives
const TRASH_EXTENSIONS: &[&str] = &[
    "tmp",
    "temp",
    "cache",
    "bak",
    "backup",
    "old",
    "log",
    "part",
    "crdownload",
    "download",
    "incomplete",
    "partial",
    "thumbs",
    "~",
    "swp",
    "swo",
    "orig",
    "rej",
    "crash",
    "dmp",
    "trace",
];

/// Exact file names (lowercased) left behind by shells and indexers
const TRASH_FILE_NAMES: &[&str] = &[
    "thumbs.db",
    "desktop.ini",
    ".ds_store",
    "icon\r",
    "ehthumbs.db",
    "ehthumbs_vista.db",
    ".spotlight-v100",
    ".trashes",
    ".fseventsd",
    ".temporaryitems",
    ".apdisk",
    "network trash folder",
    "temporary items",
    "recycled",
    "recycle.bin",
    ".recycle",
    "$recycle.bin",
];

/// Directory names whose entire contents count as trash
const TRASH_FOLDER_NAMES: &[&str] = &[
    "temp",
    "tmp",
    "cache",
    "caches",
    "temporary",
    "trash",
    "recycle",
    "backup",
    "old",
    "logs",
    "log",
    "analytics",
    "telemetry",
    "crashlogs",
    "errorlogs",
    "thumbnails",
    "thumb",
    "preview",
    "previews",
    ".trash",
];

/// Check whether a file looks like trash, by path pattern, extension,
/// exact name, or the looser name heuristics.
pub fn is_trash_file(name: &str, path: &str) -> bool {
    let name = name.to_lowercase();
    let extension = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    if PATH_PATTERNS.iter().any(|re| re.is_match(path)) {
        return true;
    }

    if TRASH_EXTENSIONS.contains(&extension) {
        return true;
    }

    if TRASH_FILE_NAMES.contains(&name.as_str()) {
        return true;
    }

    matches_special_pattern(&name, &path.to_lowercase())
}

/// Check whether a directory is a recognized trash folder by name
pub fn is_trash_dir(name: &str) -> bool {
    TRASH_FOLDER_NAMES.contains(&name.to_lowercase().as_str())
}

/// Looser heuristics over the (lowercased) name and path
fn matches_special_pattern(name: &str, path: &str) -> bool {
    // Temp file shapes
    if name.starts_with("tmp") || name.starts_with("temp") || name.ends_with('~')
        || name.contains(".tmp.")
    {
        return true;
    }

    // Backup file shapes
    if name.ends_with(".bak")
        || name.ends_with(".backup")
        || name.ends_with(".old")
        || name.contains(".backup.")
    {
        return true;
    }

    // Log file shapes
    if name.ends_with(".log")
        || (name.contains("log") && (name.ends_with(".txt") || name.ends_with(".out")))
    {
        return true;
    }

    // Crash reports and dumps
    if name.contains("crash")
        || name.contains("dump")
        || (name.contains("error") && name.ends_with(".txt"))
    {
        return true;
    }

    // Network caches
    if path.contains("http") && (path.contains("cache") || path.contains("temp")) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_patterns() {
        assert!(is_trash_file("blob", "/data/app/crashlytics/blob"));
        assert!(is_trash_file("events.json", "/home/u/.local/Telemetry/events.json"));
        assert!(is_trash_file("x.part", "/home/u/Downloads/x.part"));
        assert!(is_trash_file("img", "/var/cache/imageloader/img"));
        assert!(!is_trash_file("notes.md", "/home/u/Documents/notes.md"));
    }

    #[test]
    fn test_partial_download_requires_download_dir() {
        assert!(is_trash_file("movie.crdownload", "/home/u/Download/movie.crdownload"));
        // .crdownload is also in the extension table, so it matches anywhere
        assert!(is_trash_file("movie.crdownload", "/home/u/Videos/movie.crdownload"));
    }

    #[test]
    fn test_trash_extensions() {
        assert!(is_trash_file("report.bak", "/home/u/work/report.bak"));
        assert!(is_trash_file("core.dmp", "/home/u/work/core.dmp"));
        assert!(is_trash_file("session.trace", "/opt/app/session.trace"));
        assert!(!is_trash_file("report.pdf", "/home/u/work/report.pdf"));
    }

    #[test]
    fn test_trash_file_names() {
        assert!(is_trash_file("Thumbs.db", "/mnt/usb/Thumbs.db"));
        assert!(is_trash_file(".DS_Store", "/mnt/usb/.DS_Store"));
        assert!(is_trash_file("desktop.ini", "/mnt/usb/desktop.ini"));
    }

    #[test]
    fn test_special_patterns() {
        assert!(is_trash_file("tmp8X2f1", "/home/u/tmp8X2f1"));
        assert!(is_trash_file("settings~", "/home/u/settings~"));
        assert!(is_trash_file("db.tmp.1", "/home/u/db.tmp.1"));
        assert!(is_trash_file("app.backup.tar", "/home/u/app.backup.tar"));
        assert!(is_trash_file("debug-log.txt", "/home/u/debug-log.txt"));
        assert!(is_trash_file("error.txt", "/home/u/error.txt"));
        assert!(is_trash_file("f91a2", "/home/u/.cache/http-cache/f91a2"));
        // "log" anywhere in a .txt name is enough, even mid-word
        assert!(is_trash_file("catalog.txt", "/home/u/catalog.txt"));
        assert!(!is_trash_file("recipe.txt", "/home/u/recipe.txt"));
    }

    #[test]
    fn test_trash_dirs() {
        assert!(is_trash_dir("cache"));
        assert!(is_trash_dir("Caches"));
        assert!(is_trash_dir(".Trash"));
        assert!(is_trash_dir("thumbnails"));
        assert!(!is_trash_dir("src"));
        assert!(!is_trash_dir("Documents"));
    }
}
