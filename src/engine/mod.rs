//! engine
//!
//! Orchestrates the rename lifecycle: resolve prefix, check presence,
//! request the host rename, report the outcome.
//!
//! # Architecture
//!
//! The engine is the layer between the CLI and the host. Commands hand it
//! an immutable conventions table, a skip list, and a host; the engine
//! makes every per-asset decision locally and only then calls the host.
//!
//! # Invariants
//!
//! - The conventions table is never mutated after construction
//! - A host failure on one asset never halts the rest of the batch
//! - Every asset in a batch appears in exactly one report bucket
//!   (renamed, skipped, or failed)
//!
//! # Modules
//!
//! - [`prefixer`] - Batch apply/undo and the asset-added handler
//! - [`watch`] - Polling event source for newly added assets

pub mod prefixer;
pub mod watch;

pub use prefixer::{BatchReport, EventOutcome, Prefixer, RenameRecord, SkipReason};
pub use watch::WatchState;

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command
/// behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Remote Control endpoint override from the CLI.
    pub host_url: Option<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            debug: false,
            quiet: false,
            interactive: true,
            host_url: None,
        }
    }
}
