use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global CleanSweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extra directories to include in the trash scan.
    /// Entries may use `~` and glob patterns.
    #[serde(default)]
    pub scan_roots: Vec<String>,

    /// Directories to search for pictures and media.
    /// Defaults to the platform pictures and videos directories.
    #[serde(default)]
    pub media_roots: Vec<String>,

    /// Path substrings to exclude from every scan
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// How deep the trash scan descends below each root
    #[serde(default = "default_max_depth")]
    pub max_scan_depth: u32,

    /// Output format preference
    #[serde(default)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Quiet,
}

fn default_max_depth() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_roots: Vec::new(),
            media_roots: Vec::new(),
            exclude_paths: Vec::new(),
            max_scan_depth: default_max_depth(),
            output_format: OutputFormat::Human,
        }
    }
}

impl Config {
    /// Get the CleanSweep data directory (~/.cleansweep)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".cleansweep")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Load config from file, or fall back to defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let dir = path.parent().unwrap();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir: {}", dir.display()))?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Initialize the CleanSweep data directory
    pub fn init_dirs() -> Result<()> {
        let dir = Self::data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        Ok(())
    }

    /// Check if a path should be excluded from scanning
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.display().to_string();
        self.exclude_paths.iter().any(|p| path_str.contains(p))
    }

    /// Media roots with defaults applied when none are configured
    pub fn effective_media_roots(&self) -> Vec<String> {
        if !self.media_roots.is_empty() {
            return self.media_roots.clone();
        }
        let mut roots = Vec::new();
        if let Some(p) = dirs::picture_dir() {
            roots.push(p.display().to_string());
        }
        if let Some(v) = dirs::video_dir() {
            roots.push(v.display().to_string());
        }
        if roots.is_empty() {
            if let Some(home) = dirs::home_dir() {
                roots.push(home.display().to_string());
            }
        }
        roots
    }
}
