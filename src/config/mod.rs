//! Configuration resolution for boxplan

pub mod preset;
pub mod resolver;
pub mod units;

pub use preset::{load_preset, parse_preset, PresetError};
pub use resolver::{MissingOptionError, RawOptions, RawValue, ResolvedConfig};
pub use units::{UnitDefaults, UnitSystem};
