//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Batch results go through [`print_report`] so apply and undo render
//! identically.

use std::fmt::Display;

use crate::engine::{BatchReport, RenameRecord, SkipReason};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a single rename for display.
pub fn format_rename(record: &RenameRecord, dry_run: bool) -> String {
    let verb = if dry_run { "would rename" } else { "renamed" };
    format!(
        "{} {} -> {}",
        verb,
        record.asset.object_path(),
        record.new_name.as_str()
    )
}

/// Format a skipped asset for display.
pub fn format_skip(record: &(crate::core::types::AssetRef, SkipReason)) -> String {
    format!("skipped {}: {}", record.0.object_path(), record.1)
}

/// Print a batch report.
///
/// Renames print at normal verbosity, skips at debug, failures always.
/// Ends with a one-line summary.
pub fn print_report(report: &BatchReport, dry_run: bool, verbosity: Verbosity) {
    for record in &report.renamed {
        print(format_rename(record, dry_run), verbosity);
    }
    for skip in &report.skipped {
        debug(format_skip(skip), verbosity);
    }
    for (asset, err) in &report.failed {
        error(format!("{}: {}", asset.object_path(), err));
    }
    print(summary_line(report, dry_run), verbosity);
}

fn summary_line(report: &BatchReport, dry_run: bool) -> String {
    let verb = if dry_run { "would rename" } else { "renamed" };
    format!(
        "{} {}, skipped {}, failed {}",
        verb,
        report.renamed.len(),
        report.skipped.len(),
        report.failed.len()
    )
}
