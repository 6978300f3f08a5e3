use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cleansweep::cli::args::{Cli, Commands, ConfigAction, FilesAction, OutputFormat, PicsAction};
use cleansweep::cli::output;
use cleansweep::cleaner::CleanMode;
use cleansweep::common::config::Config;
use cleansweep::common::format;
use cleansweep::common::safety;
use cleansweep::files::{self, FileFilter};
use cleansweep::media;
use cleansweep::storage;
use cleansweep::trash::{self, CleanState, ScanState, ScannedFile, TrashCategory, TrashScanResults};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cleansweep=debug")
            .init();
    }

    match cli.command {
        Commands::Scan { detailed } => cmd_scan(&cli, detailed),

        Commands::Clean {
            ref categories,
            all,
            yes,
            dry_run,
        } => cmd_clean(&cli, categories.clone(), all, yes, dry_run),

        Commands::Files { ref action } => cmd_files(&cli, action),

        Commands::Pics { ref action } => cmd_pics(&cli, action),

        Commands::Storage => cmd_storage(&cli),

        Commands::Config { action } => cmd_config(action),

        Commands::Status => cmd_status(),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                cleansweep::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                cleansweep::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                cleansweep::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "cleansweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

// ─── Scan ─────────────────────────────────────────────────────────────────────

fn cmd_scan(cli: &Cli, detailed: bool) -> Result<()> {
    let config = Config::load()?;
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);

    let results = run_trash_scan(&config, show_progress);

    match cli.format {
        OutputFormat::Human => output::print_scan_results(&results, detailed),
        OutputFormat::Json => output::print_scan_json(&results),
        OutputFormat::Quiet => output::print_scan_quiet(&results),
    }

    Ok(())
}

/// Run the trash scan, driving a spinner from the scan states
fn run_trash_scan(config: &Config, show_progress: bool) -> TrashScanResults {
    if !show_progress {
        return trash::scan(config, |_| {});
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );

    let results = trash::scan(config, |state| match state {
        ScanState::Scanning {
            current,
            bytes_found,
        } => {
            spinner.set_message(format!(
                "Scanning {} ({} found)",
                current,
                format::format_size(*bytes_found)
            ));
            spinner.tick();
        }
        ScanState::Progress {
            files_found,
            bytes_found,
        } => {
            spinner.set_message(format!(
                "{} flagged, {}",
                format::format_count(*files_found),
                format::format_size(*bytes_found)
            ));
            spinner.tick();
        }
        _ => {}
    });

    spinner.finish_and_clear();
    results
}

// ─── Clean ────────────────────────────────────────────────────────────────────

fn cmd_clean(
    cli: &Cli,
    categories: Option<Vec<cleansweep::cli::args::CategoryFilter>>,
    all: bool,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load()?;
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);

    let results = run_trash_scan(&config, show_progress);

    if results.files.is_empty() {
        println!("  {} Nothing to clean!", "✨");
        return Ok(());
    }

    // Work out which categories were requested
    let wanted: Vec<TrashCategory> = if all {
        TrashCategory::ALL.to_vec()
    } else if let Some(filters) = categories {
        filters.into_iter().map(Into::into).collect()
    } else {
        // No selection — show what was found and how to choose
        output::print_scan_results(&results, false);
        println!(
            "  {} Select with {} or pass {}",
            "💡",
            "--categories <cache|packages|logs|temp|other>".cyan(),
            "--all".cyan()
        );
        println!();
        return Ok(());
    };

    // Select every file in the requested categories
    let mut groups = results.groups();
    for group in &mut groups {
        if wanted.contains(&group.category) {
            group.toggle_all();
        }
    }
    let selected: Vec<ScannedFile> = groups
        .iter()
        .flat_map(|g| g.selected_files().into_iter().cloned())
        .collect();
    let selected_size: u64 = selected.iter().map(|f| f.size_bytes).sum();

    if selected.is_empty() {
        println!("  {} Nothing matched the selected categories.", "✨");
        return Ok(());
    }

    if matches!(cli.format, OutputFormat::Human) {
        output::print_scan_results(&results, false);
    }

    if dry_run {
        let report = trash::delete_selected(&selected, CleanMode::DryRun, |_| {})?;
        println!(
            "  {} Dry run — would clean {} ({}). No files modified.",
            "ℹ️",
            format::format_count(report.files_removed),
            format::format_size(report.bytes_freed)
        );
        return Ok(());
    }

    // Safety valve against runaway selections
    if let Err(msg) = safety::validate_clean_operation(selected.len(), selected_size) {
        if !yes {
            anyhow::bail!(msg);
        }
    }

    if !yes
        && !confirm(&format!(
            "Permanently delete {} ({})?",
            format::format_count(selected.len()),
            format::format_size(selected_size)
        ))?
    {
        println!("  {} Cancelled", "✗".red());
        return Ok(());
    }

    let report = run_trash_clean(&selected, show_progress)?;

    match cli.format {
        OutputFormat::Human => output::print_clean_report(&report),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "mode": format!("{}", report.mode),
                "files_removed": report.files_removed,
                "bytes_freed": report.bytes_freed,
                "errors": report.errors,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Quiet => {
            println!(
                "{}  {}",
                format::format_size(report.bytes_freed),
                report.files_removed
            );
        }
    }

    Ok(())
}

/// Delete flagged files, driving a progress bar from the clean states
fn run_trash_clean(
    files: &[ScannedFile],
    show_progress: bool,
) -> Result<cleansweep::cleaner::CleanReport> {
    if !show_progress {
        return trash::delete_selected(files, CleanMode::Delete, |_| {});
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.red} [{bar:40.red/blue}] {pos}/{len} Deleting...")
            .unwrap()
            .progress_chars("━━░"),
    );

    let report = trash::delete_selected(files, CleanMode::Delete, |state| {
        if let CleanState::Cleaning { done, .. } = state {
            pb.set_position(*done as u64);
        }
    })?;

    pb.finish_and_clear();
    Ok(report)
}

// ─── Files ────────────────────────────────────────────────────────────────────

fn cmd_files(cli: &Cli, action: &FilesAction) -> Result<()> {
    let config = Config::load()?;
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);

    match action {
        FilesAction::List {
            kind,
            larger_than,
            within_days,
            detailed,
        } => {
            let filter = build_filter(*kind, *larger_than, *within_days);

            if show_progress {
                println!();
                println!("  {} Scanning files...", "🔍");
            }
            let results = files::scan_all(&config);
            let matched = filter.apply(&results.items);

            match cli.format {
                OutputFormat::Human => output::print_files_results(&matched, *detailed),
                OutputFormat::Json => output::print_files_json(&matched),
                OutputFormat::Quiet => output::print_files_quiet(&matched),
            }
            Ok(())
        }

        FilesAction::Clean {
            kind,
            larger_than,
            within_days,
            yes,
            dry_run,
        } => {
            let filter = build_filter(*kind, *larger_than, *within_days);
            if filter.is_empty() {
                anyhow::bail!(
                    "Refusing to clean the entire inventory. \
                     Narrow it down with --kind, --larger-than, or --within-days."
                );
            }

            if show_progress {
                println!();
                println!("  {} Scanning files...", "🔍");
            }
            let mut results = files::scan_all(&config);
            results.select_matching(&filter);
            let selected = results.selected_items();
            let selected_size: u64 = selected.iter().map(|i| i.size_bytes).sum();

            if selected.is_empty() {
                println!("  {} Nothing matched.", "✨");
                return Ok(());
            }

            if matches!(cli.format, OutputFormat::Human) {
                output::print_files_results(&selected, false);
            }

            if *dry_run {
                let report = files::delete_items(&selected, CleanMode::DryRun, |_, _| {})?;
                println!(
                    "  {} Dry run — would delete {} ({}). No files modified.",
                    "ℹ️",
                    format::format_count(report.files_removed),
                    format::format_size(report.bytes_freed)
                );
                return Ok(());
            }

            if let Err(msg) = safety::validate_clean_operation(selected.len(), selected_size) {
                if !*yes {
                    anyhow::bail!(msg);
                }
            }

            if !*yes
                && !confirm(&format!(
                    "Permanently delete {} ({})?",
                    format::format_count(selected.len()),
                    format::format_size(selected_size)
                ))?
            {
                println!("  {} Cancelled", "✗".red());
                return Ok(());
            }

            let report = files::delete_items(&selected, CleanMode::Delete, |_, _| {})?;
            output::print_clean_report(&report);
            Ok(())
        }
    }
}

fn build_filter(
    kind: Option<cleansweep::cli::args::KindFilter>,
    larger_than_mb: Option<u64>,
    within_days: Option<u32>,
) -> FileFilter {
    FileFilter {
        kind: kind.map(Into::into),
        min_size_bytes: larger_than_mb.map(|mb| mb << 20),
        within_days,
    }
}

// ─── Pics ─────────────────────────────────────────────────────────────────────

fn cmd_pics(cli: &Cli, action: &PicsAction) -> Result<()> {
    let config = Config::load()?;
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);

    match action {
        PicsAction::List { detailed } => {
            let groups = run_picture_scan(&config, show_progress)?;

            match cli.format {
                OutputFormat::Human => output::print_picture_groups(&groups, *detailed),
                OutputFormat::Json => output::print_pictures_json(&groups),
                OutputFormat::Quiet => output::print_pictures_quiet(&groups),
            }
            Ok(())
        }

        PicsAction::Clean {
            date,
            all,
            yes,
            dry_run,
        } => {
            let mut groups = run_picture_scan(&config, show_progress)?;

            if *all {
                media::select_all(&mut groups, true);
            } else if let Some(date) = date {
                match media::group_by_date(&mut groups, date) {
                    Some(group) => group.toggle_all(),
                    None => anyhow::bail!("No picture group for date '{}'", date),
                }
            } else {
                // No selection — show the groups and how to choose
                output::print_picture_groups(&groups, false);
                println!(
                    "  {} Select with {} or pass {}",
                    "💡",
                    "--date <YYYY-MM-DD>".cyan(),
                    "--all".cyan()
                );
                println!();
                return Ok(());
            }

            let info = media::selection_info(&groups);
            if info.selected_count == 0 {
                println!("  {} Nothing selected.", "✨");
                return Ok(());
            }

            if *dry_run {
                println!(
                    "  {} Dry run — would delete {} pictures ({}). No files modified.",
                    "ℹ️",
                    info.selected_count,
                    format::format_size(info.selected_bytes)
                );
                return Ok(());
            }

            if let Err(msg) =
                safety::validate_clean_operation(info.selected_count, info.selected_bytes)
            {
                if !*yes {
                    anyhow::bail!(msg);
                }
            }

            if !*yes
                && !confirm(&format!(
                    "Permanently delete {} pictures ({})?",
                    info.selected_count,
                    format::format_size(info.selected_bytes)
                ))?
            {
                println!("  {} Cancelled", "✗".red());
                return Ok(());
            }

            let selected = media::selected_pictures(&groups);
            let report = media::delete_pictures(&selected, CleanMode::Delete, |_, _| {})?;
            output::print_clean_report(&report);
            Ok(())
        }
    }
}

/// Scan pictures with a percentage bar
fn run_picture_scan(config: &Config, show_progress: bool) -> Result<Vec<media::PictureGroup>> {
    if !show_progress {
        return media::scan_pictures(config, |_, _| {});
    }

    println!();
    println!("  {} Scanning pictures...", "🔍");

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {percent}%")
            .unwrap()
            .progress_chars("━━░"),
    );

    let groups = media::scan_pictures(config, |current, total| {
        if total > 0 {
            pb.set_position((current * 100 / total) as u64);
        }
    })?;

    pb.finish_and_clear();
    Ok(groups)
}

// ─── Storage ──────────────────────────────────────────────────────────────────

fn cmd_storage(cli: &Cli) -> Result<()> {
    if !cli.quiet && matches!(cli.format, OutputFormat::Human) {
        println!();
        println!("  {} Analyzing disk usage...", "📊");
    }

    let overview = storage::analyze();

    match cli.format {
        OutputFormat::Human => output::print_storage(&overview),
        OutputFormat::Json => output::print_storage_json(&overview),
        OutputFormat::Quiet => {
            println!(
                "{}  {}  {}",
                format::format_size(overview.info.used),
                format::format_size(overview.info.available),
                format::format_size(overview.info.total)
            );
        }
    }

    Ok(())
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            Config::init_dirs()?;
            let config = Config::default();
            config.save()?;
            println!("  {} CleanSweep initialized at ~/.cleansweep", "✓".green());
            Ok(())
        }
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("  {} Configuration reset to defaults", "✓".green());
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "max_scan_depth" => config.max_scan_depth = value.parse()?,
                _ => anyhow::bail!("Unknown config key: {}", key),
            }
            config.save()?;
            println!("  {} Set {} = {}", "✓".green(), key, value);
            Ok(())
        }
    }
}

// ─── Status ───────────────────────────────────────────────────────────────────

fn cmd_status() -> Result<()> {
    let config = Config::load()?;

    println!();
    println!("  {} CleanSweep Status", "📊");
    println!("{}", "─".repeat(60).dimmed());
    println!();

    println!("  {} Config file: {}", "⚙️", Config::config_path().display());
    println!("  {} Max scan depth: {}", "⚙️", config.max_scan_depth);
    println!(
        "  {} Excluded patterns: {}",
        "⚙️",
        config.exclude_paths.len()
    );

    let (roots, skipped) = trash::scan_roots(&config);
    println!();
    println!("  {} Trash scan roots:", "📋");
    for root in &roots {
        println!("    {} {}", "•".dimmed(), format::format_path(root));
    }
    for msg in &skipped {
        println!("    {} {}", "⚠".yellow(), msg.dimmed());
    }

    println!();
    println!("  {} Media roots:", "📋");
    for root in config.effective_media_roots() {
        println!("    {} {}", "•".dimmed(), root);
    }
    println!();

    Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Ask a yes/no question on stdin, defaulting to no
fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("\n  {} {} [y/N] ", "❓", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
