use colored::*;

use crate::cleaner::CleanReport;
use crate::common::format::{self, format_path, format_size, format_size_colored};
use crate::files::{FileItem, FileKind};
use crate::media::PictureGroup;
use crate::storage::StorageOverview;
use crate::trash::{CategoryGroup, TrashCategory, TrashScanResults};

/// Print trash scan results in human-readable format
pub fn print_scan_results(results: &TrashScanResults, detailed: bool) {
    println!();
    println!("{}  CleanSweep Scan Results", "🧹");
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  Scanned in {}  •  {} reclaimable  •  {}",
        format::format_duration(results.duration_secs).cyan(),
        format_size_colored(results.total_bytes),
        format::format_count(results.total_files).dimmed()
    );
    println!("{}", "─".repeat(60).dimmed());
    println!();

    if results.files.is_empty() {
        println!("  {} Your storage is already clean!", "✨");
        return;
    }

    for group in results.groups().iter().filter(|g| g.has_files()) {
        print_category_group(group, detailed);
    }
    println!();

    if !results.errors.is_empty() {
        println!(
            "  {} {}",
            "⚠".yellow(),
            format!("{} warnings:", results.errors.len()).yellow()
        );
        for error in &results.errors {
            println!("    {} {}", "→".dimmed(), error.dimmed());
        }
        println!();
    }

    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  {} Total reclaimable: {}",
        "💾",
        format_size_colored(results.total_bytes)
    );
    println!(
        "  {} Run {} to preview a clean",
        "💡",
        "cleansweep clean --all --dry-run".cyan()
    );
    println!();
}

/// Print one category group
fn print_category_group(group: &CategoryGroup, detailed: bool) {
    println!(
        "    {} {:<16} {:>10}  ({})",
        category_icon(group.category),
        format!("{}", group.category),
        format_size(group.total_size()),
        format::format_count(group.files.len()).dimmed()
    );

    if detailed {
        let mut sorted = group.files.clone();
        sorted.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        for file in sorted.iter().take(5) {
            println!(
                "        {} {} ({})",
                "•".dimmed(),
                format_path(&file.path).dimmed(),
                format_size(file.size_bytes).dimmed()
            );
        }
        if group.files.len() > 5 {
            println!(
                "        {} ... and {} more",
                "•".dimmed(),
                (group.files.len() - 5).to_string().dimmed()
            );
        }
        println!();
    }
}

fn category_icon(category: TrashCategory) -> &'static str {
    match category {
        TrashCategory::AppCache => "📁",
        TrashCategory::PackageFiles => "📦",
        TrashCategory::LogFiles => "📋",
        TrashCategory::TempFiles => "🗑️",
        TrashCategory::Other => "📄",
    }
}

/// Print trash scan results as JSON
pub fn print_scan_json(results: &TrashScanResults) {
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}

/// Print a minimal scan summary
pub fn print_scan_quiet(results: &TrashScanResults) {
    println!(
        "{}  {}  {}",
        format_size(results.total_bytes),
        results.total_files,
        results.roots.len()
    );
}

/// Print a clean operation report
pub fn print_clean_report(report: &CleanReport) {
    println!();
    println!(
        "  {} Cleaned {}, freed {}",
        "✓".green(),
        format::format_count(report.files_removed),
        format_size_colored(report.bytes_freed)
    );
    if !report.errors.is_empty() {
        println!(
            "  {} {} files could not be removed:",
            "⚠".yellow(),
            report.errors.len()
        );
        for error in report.errors.iter().take(5) {
            println!("    {} {}", "→".dimmed(), error.dimmed());
        }
        if report.errors.len() > 5 {
            println!("    {} ... and {} more", "→".dimmed(), report.errors.len() - 5);
        }
    }
    println!();
}

// ─── Files ────────────────────────────────────────────────────────────────────

/// Print inventory results: a per-kind summary, optionally every file
pub fn print_files_results(items: &[&FileItem], detailed: bool) {
    println!();
    println!("{}  File Inventory", "🗃️");
    println!("{}", "─".repeat(60).dimmed());

    let total: u64 = items.iter().map(|i| i.size_bytes).sum();
    println!(
        "  {}  •  {}",
        format_size_colored(total),
        format::format_count(items.len()).dimmed()
    );
    println!("{}", "─".repeat(60).dimmed());
    println!();

    if items.is_empty() {
        println!("  {} Nothing matched.", "✨");
        return;
    }

    for kind in FileKind::ALL {
        let of_kind: Vec<&&FileItem> = items.iter().filter(|i| i.kind == kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        let size: u64 = of_kind.iter().map(|i| i.size_bytes).sum();
        println!(
            "    {} {:<10} {:>10}  ({})",
            kind_icon(kind),
            format!("{}", kind),
            format_size(size),
            format::format_count(of_kind.len()).dimmed()
        );

        if detailed {
            let mut sorted = of_kind.clone();
            sorted.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
            for item in sorted {
                println!(
                    "        {} {} ({})",
                    "•".dimmed(),
                    format_path(&item.path).dimmed(),
                    format_size(item.size_bytes).dimmed()
                );
            }
            println!();
        }
    }
    println!();
}

fn kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => "🖼️",
        FileKind::Video => "🎬",
        FileKind::Audio => "🎵",
        FileKind::Documents => "📄",
        FileKind::Download => "📥",
        FileKind::Archive => "🗜️",
    }
}

/// Print inventory items as JSON
pub fn print_files_json(items: &[&FileItem]) {
    match serde_json::to_string_pretty(items) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}

/// Print a minimal inventory summary
pub fn print_files_quiet(items: &[&FileItem]) {
    let total: u64 = items.iter().map(|i| i.size_bytes).sum();
    println!("{}  {}", format_size(total), items.len());
}

// ─── Pictures ─────────────────────────────────────────────────────────────────

/// Print picture groups, newest first
pub fn print_picture_groups(groups: &[PictureGroup], detailed: bool) {
    println!();
    println!("{}  Pictures by Date", "🖼️");
    println!("{}", "─".repeat(60).dimmed());

    let total: u64 = groups.iter().map(|g| g.total_size()).sum();
    let count: usize = groups.iter().map(|g| g.pictures.len()).sum();
    println!(
        "  {}  •  {} in {} groups",
        format_size_colored(total),
        format!("{} pictures", count).dimmed(),
        groups.len()
    );
    println!("{}", "─".repeat(60).dimmed());
    println!();

    if groups.is_empty() {
        println!("  {} No pictures found.", "✨");
        return;
    }

    for group in groups {
        println!(
            "    {} {}  {:>10}  ({})",
            "📅",
            group.date.bold(),
            format_size(group.total_size()),
            format!("{} pictures", group.pictures.len()).dimmed()
        );
        if detailed {
            for picture in &group.pictures {
                println!(
                    "        {} {} ({})",
                    "•".dimmed(),
                    format_path(&picture.path).dimmed(),
                    format_size(picture.size_bytes).dimmed()
                );
            }
            println!();
        }
    }
    println!();
}

/// Print picture groups as JSON
pub fn print_pictures_json(groups: &[PictureGroup]) {
    match serde_json::to_string_pretty(groups) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}

/// Print a minimal picture summary
pub fn print_pictures_quiet(groups: &[PictureGroup]) {
    let total: u64 = groups.iter().map(|g| g.total_size()).sum();
    let count: usize = groups.iter().map(|g| g.pictures.len()).sum();
    println!("{}  {}  {}", format_size(total), count, groups.len());
}

// ─── Storage ──────────────────────────────────────────────────────────────────

/// Print the storage overview with a usage bar and breakdown
pub fn print_storage(overview: &StorageOverview) {
    let bar_width: usize = 40;
    let info = &overview.info;

    println!();
    println!("  {} Storage Overview", "💾");
    println!("{}", "─".repeat(65).dimmed());
    println!();

    let used_frac = if info.total > 0 {
        info.used as f64 / info.total as f64
    } else {
        0.0
    };
    let filled = (used_frac * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);

    let bar = if used_frac > 0.9 {
        "━".repeat(filled).red()
    } else if used_frac > 0.75 {
        "━".repeat(filled).yellow()
    } else {
        "━".repeat(filled).green()
    };

    println!(
        "  {} / {}  ({} used)",
        format_size(info.used),
        format_size(info.total),
        format::format_percent(info.used, info.total),
    );
    println!(
        "  {}{}  {} available",
        bar,
        "━".repeat(empty).dimmed(),
        format_size(info.available).cyan(),
    );
    println!();

    if overview.entries.is_empty() {
        return;
    }

    println!("  {} Directory Breakdown", "📊");
    println!("{}", "─".repeat(65).dimmed());
    println!();

    let max_size = overview.entries.first().map(|e| e.size).unwrap_or(1).max(1);
    for entry in &overview.entries {
        let frac = entry.size as f64 / max_size as f64;
        let bar_len = (frac * 25.0).round().max(1.0) as usize;
        println!(
            "    {:<12} {:<25} {:>10}  ({})",
            format::truncate(&entry.name, 12),
            "█".repeat(bar_len).cyan(),
            format_size(entry.size),
            format::format_percent(entry.size, info.total).dimmed(),
        );
    }
    println!();
}

/// Print the storage overview as JSON
pub fn print_storage_json(overview: &StorageOverview) {
    let json = serde_json::json!({
        "total": overview.info.total,
        "used": overview.info.used,
        "available": overview.info.available,
        "used_percentage": overview.info.used_percentage(),
        "entries": overview.entries,
    });
    match serde_json::to_string_pretty(&json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}
