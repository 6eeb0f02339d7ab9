//! core
//!
//! Core domain types and operations for Prefixer.
//!
//! # Modules
//!
//! - [`types`] - Strong types: AssetName, ClassName, PackagePath, AssetRef
//! - [`conventions`] - Naming-convention table and CSV loader
//! - [`prefix`] - Pure prefix arithmetic on asset names
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for project files
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The conventions table is constructed once and read-only thereafter
//! - All lookups and name arithmetic are deterministic and side-effect free

pub mod config;
pub mod conventions;
pub mod paths;
pub mod prefix;
pub mod types;
