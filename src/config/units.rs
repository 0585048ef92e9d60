//! Unit systems and the per-unit default tables.
//!
//! Margin, padding, and stroke widths only make sense relative to a unit
//! system, so their defaults live here rather than with the base defaults.

use std::str::FromStr;

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement systems supported for box dimensions and page geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Millimeters,
    Inches,
}

impl UnitSystem {
    /// Convert a length in PDF points into this unit system.
    pub fn from_points(&self, points: f64) -> f64 {
        let inches = points / POINTS_PER_INCH;
        match self {
            UnitSystem::Inches => inches,
            UnitSystem::Millimeters => inches * MM_PER_INCH,
        }
    }

    /// The name used for this unit system in configuration values.
    pub fn name(&self) -> &'static str {
        match self {
            UnitSystem::Millimeters => "mm",
            UnitSystem::Inches => "in",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(UnitSystem::Millimeters),
            "in" => Ok(UnitSystem::Inches),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

/// Gap-filling defaults applied for a recognized unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefaults {
    pub margin: f64,
    pub padding: f64,
    pub stroke: f64,
}

/// Look up the defaults table for a `units` value.
///
/// Unrecognized unit names are a lookup miss, not an error: the caller
/// simply applies no unit-specific defaults.
pub fn defaults_for(units: &str) -> Option<UnitDefaults> {
    match units {
        "mm" => Some(UnitDefaults {
            margin: 5.0,
            padding: 5.0,
            stroke: 0.0254,
        }),
        "in" => Some(UnitDefaults {
            margin: 0.125,
            padding: 0.1,
            stroke: 0.001,
        }),
        _ => None,
    }
}
