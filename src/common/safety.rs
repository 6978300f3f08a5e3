use std::path::Path;

/// Paths that must NEVER be deleted under any circumstances.
/// This is a critical safety net against bugs in scan roots.
const PROTECTED_PATHS: &[&str] = &[
    "/",
    "/bin",
    "/boot",
    "/dev",
    "/etc",
    "/home",
    "/lib",
    "/lib64",
    "/opt",
    "/proc",
    "/root",
    "/sbin",
    "/srv",
    "/sys",
    "/usr",
    "/var",
];

/// Paths under home that must never be deleted entirely
const PROTECTED_HOME_DIRS: &[&str] = &[
    "", // home dir itself
    "Desktop",
    "Documents",
    "Downloads",
    "Pictures",
    "Music",
    "Videos",
    ".config",
    ".local",
    ".ssh",
    ".gnupg",
];

/// Check if a path is protected and should NEVER be deleted
pub fn is_protected(path: &Path) -> bool {
    let path_str = path.to_string_lossy();

    // Never delete root-level system paths
    for protected in PROTECTED_PATHS {
        if path_str == *protected {
            return true;
        }
    }

    // Never delete the home directory or its standard subdirectories
    if let Some(home) = dirs::home_dir() {
        for dir in PROTECTED_HOME_DIRS {
            let protected_path = if dir.is_empty() {
                home.clone()
            } else {
                home.join(dir)
            };
            if path == protected_path {
                return true;
            }
        }
    }

    false
}

/// Maximum number of files to delete in a single operation.
/// A safety limit to prevent runaway deletion bugs.
pub const MAX_FILES_PER_OPERATION: usize = 100_000;

/// Maximum total bytes to delete in a single operation (50 GB)
/// before requiring explicit confirmation.
pub const MAX_BYTES_WARNING_THRESHOLD: u64 = 50 << 30;

/// Validate a cleaning operation before execution
pub fn validate_clean_operation(file_count: usize, total_bytes: u64) -> Result<(), String> {
    if file_count > MAX_FILES_PER_OPERATION {
        return Err(format!(
            "Operation would affect {} files (limit: {}).",
            file_count, MAX_FILES_PER_OPERATION
        ));
    }

    if total_bytes > MAX_BYTES_WARNING_THRESHOLD {
        return Err(format!(
            "Operation would delete {} (>{} threshold). Use --yes to override.",
            crate::common::format::format_size(total_bytes),
            crate::common::format::format_size(MAX_BYTES_WARNING_THRESHOLD),
        ));
    }

    Ok(())
}
