//! # CleanSweep
//!
//! A storage cleanup utility.
//!
//! CleanSweep scans your storage for transient trash (caches, logs,
//! temp files, backups), inventories media and document files, and
//! deletes what you select. It features:
//!
//! - **Heuristic Trash Classification**: regex path patterns plus
//!   extension, filename, and folder-name tables
//! - **Bounded Scanning**: depth-limited walks that never follow
//!   symlinks and skip unreadable entries instead of aborting
//! - **Safety-First**: dry-run support, protected-path deny list,
//!   confirmation before anything is removed
//! - **File Inventory**: images, videos, audio, documents, downloads,
//!   and archives with size and age filters
//! - **Picture Groups**: photos grouped by date, newest first
//! - **CLI as Unix Citizen**: JSON output, pipe-friendly, cron-schedulable
//! - **100% Offline**: zero telemetry, no accounts, no cloud

pub mod cli;
pub mod cleaner;
pub mod common;
pub mod files;
pub mod media;
pub mod storage;
pub mod trash;
