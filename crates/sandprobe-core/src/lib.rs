//! # sandprobe-core
//!
//! Core types, configuration, and utilities for sandprobe.
//!
//! This crate provides shared functionality used across the sandprobe crates:
//!
//! - **Configuration**: Loading and validation of the probe target list
//! - **Types**: Probe outcomes and directory listings
//! - **Utilities**: Sandbox/real home resolution and environment handling

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod types;

// Re-exports for convenience
pub use config::ProbeConfig;
pub use error::ConfigError;
pub use paths::ProbeTargets;
pub use types::*;
