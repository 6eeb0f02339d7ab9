//! host
//!
//! Abstraction for the editor host that owns the assets.
//!
//! # Architecture
//!
//! The `AssetHost` trait defines the interface for reading assets and
//! requesting renames. Host operations are invoked only after the local
//! decision (prefix lookup and presence check) is made, and a host
//! failure never compromises local correctness; failed renames are
//! reported and the batch continues.
//!
//! # Modules
//!
//! - `traits`: Core `AssetHost` trait and error type
//! - [`remote`]: Remote Control HTTP implementation
//! - [`mock`]: Mock implementation for deterministic testing

pub mod mock;
pub mod remote;
mod traits;

pub use traits::*;
