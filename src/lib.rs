//! Prefixer - Keep Unreal asset names prefixed by class
//!
//! Prefixer is a single-binary tool that enforces class-based naming
//! conventions on Unreal Engine assets: a CSV table maps asset classes to
//! name prefixes, and prefixer renames assets over the editor's Remote
//! Control API so every name starts with its mapped prefix. It can fix up
//! existing assets in a batch, undo its own renames, and watch a content
//! root to prefix assets as they are created.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Decides and executes renames, synthesizes asset-added events
//! - [`core`] - Domain types, conventions table, configuration, paths
//! - [`host`] - Abstraction over the editor (Remote Control v1, mock for tests)
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Prefixer maintains the following invariants:
//!
//! 1. An asset already carrying its prefix is never renamed again
//! 2. A class with no convention (or an empty prefix) is never touched
//! 3. Undo strips exactly the configured prefix, never a longer match
//! 4. The watcher never reacts to renames it performed itself

pub mod cli;
pub mod core;
pub mod engine;
pub mod host;
pub mod ui;
