use clap::{Parser, Subcommand, ValueEnum};

use crate::files::FileKind;
use crate::trash::TrashCategory;

/// CleanSweep — a storage cleanup utility
#[derive(Parser, Debug)]
#[command(
    name = "cleansweep",
    version,
    about = "A storage cleanup utility",
    long_about = "CleanSweep scans your storage for trash files (caches, logs, temp\n\
                   files, backups), media, documents, and downloads. Review what was\n\
                   found, then clean safely with dry-run and confirmation.",
    after_help = "EXAMPLES:\n  \
        cleansweep scan                          Scan for trash files\n  \
        cleansweep scan --detailed               Include individual files\n  \
        cleansweep clean --categories temp,logs  Clean selected categories\n  \
        cleansweep clean --all --dry-run         Preview a full clean\n  \
        cleansweep files list --kind video --larger-than 100\n  \
        cleansweep files clean --kind archive --within-days 30 --yes\n  \
        cleansweep pics list                     Pictures grouped by date\n  \
        cleansweep pics clean --date 2024-06-01  Delete one day's pictures\n  \
        cleansweep storage                       Storage overview\n  \
        cleansweep status                        Show configuration and roots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan for trash files
    Scan {
        /// Show individual files in each category
        #[arg(long)]
        detailed: bool,
    },

    /// Remove trash files
    Clean {
        /// Only clean these categories
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<CategoryFilter>>,

        /// Clean every category
        #[arg(long)]
        all: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be cleaned without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Browse and clean the file inventory
    Files {
        #[command(subcommand)]
        action: FilesAction,
    },

    /// Browse and clean pictures grouped by date
    Pics {
        #[command(subcommand)]
        action: PicsAction,
    },

    /// Show a storage usage overview
    Storage,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show configuration and scan roots
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilesAction {
    /// List files matching the filters
    List {
        /// Only this kind of file
        #[arg(long)]
        kind: Option<KindFilter>,

        /// Only files larger than this many MB
        #[arg(long, value_name = "MB")]
        larger_than: Option<u64>,

        /// Only files modified within the last N days
        #[arg(long, value_name = "DAYS")]
        within_days: Option<u32>,

        /// Show every file instead of a per-kind summary
        #[arg(long)]
        detailed: bool,
    },

    /// Delete files matching the filters
    Clean {
        /// Only this kind of file
        #[arg(long)]
        kind: Option<KindFilter>,

        /// Only files larger than this many MB
        #[arg(long, value_name = "MB")]
        larger_than: Option<u64>,

        /// Only files modified within the last N days
        #[arg(long, value_name = "DAYS")]
        within_days: Option<u32>,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PicsAction {
    /// List pictures grouped by date, newest first
    List {
        /// Show every picture in each group
        #[arg(long)]
        detailed: bool,
    },

    /// Delete pictures from a date group, or all of them
    Clean {
        /// Date group to delete (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Delete every picture found
        #[arg(long)]
        all: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset to default configuration
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Initialize the CleanSweep data directory and default config
    Init,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

/// Trash category names accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryFilter {
    Cache,
    Packages,
    Logs,
    Temp,
    Other,
}

impl From<CategoryFilter> for TrashCategory {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::Cache => TrashCategory::AppCache,
            CategoryFilter::Packages => TrashCategory::PackageFiles,
            CategoryFilter::Logs => TrashCategory::LogFiles,
            CategoryFilter::Temp => TrashCategory::TempFiles,
            CategoryFilter::Other => TrashCategory::Other,
        }
    }
}

/// File kind names accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    Image,
    Video,
    Audio,
    Docs,
    Download,
    Archive,
}

impl From<KindFilter> for FileKind {
    fn from(filter: KindFilter) -> Self {
        match filter {
            KindFilter::Image => FileKind::Image,
            KindFilter::Video => FileKind::Video,
            KindFilter::Audio => FileKind::Audio,
            KindFilter::Docs => FileKind::Documents,
            KindFilter::Download => FileKind::Download,
            KindFilter::Archive => FileKind::Archive,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
