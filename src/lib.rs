//! boxplan - Laser-Cut Box Configuration Resolver
//!
//! boxplan turns user-supplied box-building parameters (dimensions, material
//! thickness, notch size, units, page layout) into a fully-defaulted,
//! type-coerced, validated configuration for a downstream panel/cut-plan
//! generator.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pages;

pub use config::{MissingOptionError, RawOptions, RawValue, ResolvedConfig};

/// Result type alias for boxplan operations
pub type Result<T> = anyhow::Result<T>;
