//! Resolution of raw box-building options into a validated configuration.
//!
//! Callers hand over a [`RawOptions`] mapping (typically from CLI flags or a
//! preset file) and receive a [`ResolvedConfig`] with defaults merged, the
//! compact size descriptor decomposed, and every dimension coerced to a
//! float. Construction is total: malformed input degrades to defaults
//! instead of failing. The only failing operation is [`ResolvedConfig::validate`].

use crate::config::units::{self, UnitSystem};
use crate::pages::PageSize;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Default unit system when the caller does not pick one.
pub const DEFAULT_UNITS: &str = "mm";
/// Default page size name.
pub const DEFAULT_PAGE_SIZE: &str = "LETTER";
/// Default page orientation.
pub const DEFAULT_PAGE_LAYOUT: &str = "portrait";

/// Options a box design cannot be generated without.
pub const REQUIRED: [&str; 6] = ["width", "height", "depth", "thickness", "notch", "file"];

/// Raised by [`ResolvedConfig::validate`] when required options are absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {} required, but missing.", .missing.join(", "), plural_verb(.missing))]
pub struct MissingOptionError {
    /// Names of the missing options, in [`REQUIRED`] order.
    pub missing: Vec<&'static str>,
}

fn plural_verb(missing: &[&'static str]) -> &'static str {
    if missing.len() > 1 {
        "are"
    } else {
        "is"
    }
}

/// A raw option value that may arrive as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a float. Textual values use parse-or-zero semantics:
    /// the longest leading numeric prefix is parsed, anything else is 0.0.
    pub fn to_float(&self) -> f64 {
        match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => coerce_float(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

/// Caller-supplied options before resolution.
///
/// Every field is optional; an explicit `null` in a serialized source
/// deserializes to `None`, so absence is the only "unset" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub width: Option<RawValue>,
    pub height: Option<RawValue>,
    pub depth: Option<RawValue>,
    pub thickness: Option<RawValue>,
    pub notch: Option<RawValue>,
    pub margin: Option<RawValue>,
    pub padding: Option<RawValue>,
    pub stroke: Option<RawValue>,
    /// Compact descriptor `WxHxD/THICKNESS/NOTCH`.
    pub size: Option<String>,
    pub units: Option<String>,
    pub page_size: Option<String>,
    pub page_layout: Option<String>,
    pub file: Option<String>,
}

impl RawOptions {
    /// Merge two option sets, with values from `over` winning.
    pub fn overlay(self, over: RawOptions) -> RawOptions {
        RawOptions {
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            depth: over.depth.or(self.depth),
            thickness: over.thickness.or(self.thickness),
            notch: over.notch.or(self.notch),
            margin: over.margin.or(self.margin),
            padding: over.padding.or(self.padding),
            stroke: over.stroke.or(self.stroke),
            size: over.size.or(self.size),
            units: over.units.or(self.units),
            page_size: over.page_size.or(self.page_size),
            page_layout: over.page_layout.or(self.page_layout),
            file: over.file.or(self.file),
        }
    }
}

/// Fully-resolved box configuration.
///
/// Dimensions are floats once resolution completes; `units`, `page_size`,
/// and `page_layout` are always present. `size` survives only when a
/// supplied descriptor did not match the grammar and was left unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<f64>,
    pub units: String,
    pub page_size: String,
    pub page_layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ResolvedConfig {
    /// Resolve caller options into a complete configuration.
    ///
    /// Never fails: bad numeric text coerces to 0.0 and a size descriptor
    /// that does not match the grammar is carried through unparsed.
    pub fn new(options: RawOptions) -> Self {
        // Base defaults seeded first, caller values overlaid on top.
        // Textual dimension values coerce to floats as they land.
        let mut config = ResolvedConfig {
            width: options.width.map(|v| v.to_float()),
            height: options.height.map(|v| v.to_float()),
            depth: options.depth.map(|v| v.to_float()),
            thickness: options.thickness.map(|v| v.to_float()),
            notch: options.notch.map(|v| v.to_float()),
            margin: options.margin.map(|v| v.to_float()),
            padding: options.padding.map(|v| v.to_float()),
            stroke: options.stroke.map(|v| v.to_float()),
            units: options.units.unwrap_or_else(|| DEFAULT_UNITS.to_string()),
            page_size: options
                .page_size
                .unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string()),
            page_layout: options
                .page_layout
                .unwrap_or_else(|| DEFAULT_PAGE_LAYOUT.to_string()),
            file: options.file,
            size: None,
        };

        // A matching compact descriptor fully determines the five dimension
        // fields, overriding any directly-supplied values. A non-matching
        // one is kept verbatim for the caller to inspect.
        if let Some(size) = options.size {
            match parse_size_descriptor(&size) {
                Some([width, height, depth, thickness, notch]) => {
                    debug!(%size, "decomposed compact size descriptor");
                    config.width = Some(width);
                    config.height = Some(height);
                    config.depth = Some(depth);
                    config.thickness = Some(thickness);
                    config.notch = Some(notch);
                }
                None => {
                    debug!(%size, "size descriptor did not match, leaving unparsed");
                    config.size = Some(size);
                }
            }
        }

        // Unit-specific defaults fill only the gaps; an unrecognized unit
        // system is a lookup miss and the fill is skipped.
        match units::defaults_for(&config.units) {
            Some(defaults) => {
                config.margin.get_or_insert(defaults.margin);
                config.padding.get_or_insert(defaults.padding);
                config.stroke.get_or_insert(defaults.stroke);
            }
            None => {
                debug!(units = %config.units, "no defaults table for unit system");
            }
        }

        config
    }

    /// Assert that every required option is present.
    ///
    /// Collects all missing names so the caller sees the full list at once.
    pub fn validate(&self) -> Result<(), MissingOptionError> {
        let checks = [
            ("width", self.width.is_some()),
            ("height", self.height.is_some()),
            ("depth", self.depth.is_some()),
            ("thickness", self.thickness.is_some()),
            ("notch", self.notch.is_some()),
            ("file", self.file.is_some()),
        ];

        let missing: Vec<&'static str> = checks
            .into_iter()
            .filter(|&(_, present)| !present)
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingOptionError { missing })
        }
    }

    /// Render every known page size in the active unit system.
    ///
    /// One line per size, sorted by name, dimensions to one decimal place.
    /// The table is injected so this layer stays out of the page-geometry
    /// business.
    pub fn describe_page_sizes(&self, sizes: &[PageSize]) -> String {
        let unit: UnitSystem = self.units.parse().unwrap_or(UnitSystem::Millimeters);

        let mut sorted: Vec<&PageSize> = sizes.iter().collect();
        sorted.sort_by_key(|p| p.name);

        let mut output = String::from("\n");
        for page in sorted {
            output.push_str(&format!(
                "\t{:>10}:\t{:>6.1} x {:>6.1}\n",
                page.name,
                unit.from_points(page.width_pts),
                unit.from_points(page.height_pts),
            ));
        }
        output
    }
}

impl From<ResolvedConfig> for RawOptions {
    fn from(config: ResolvedConfig) -> Self {
        RawOptions {
            width: config.width.map(RawValue::Number),
            height: config.height.map(RawValue::Number),
            depth: config.depth.map(RawValue::Number),
            thickness: config.thickness.map(RawValue::Number),
            notch: config.notch.map(RawValue::Number),
            margin: config.margin.map(RawValue::Number),
            padding: config.padding.map(RawValue::Number),
            stroke: config.stroke.map(RawValue::Number),
            size: config.size,
            units: Some(config.units),
            page_size: Some(config.page_size),
            page_layout: Some(config.page_layout),
            file: config.file,
        }
    }
}

/// Grammar for the compact size descriptor: `WxHxD/THICKNESS/NOTCH`, each
/// component digits with an optional decimal part. No signs, no exponents.
fn size_regex() -> &'static Regex {
    static SIZE_REGEX: OnceLock<Regex> = OnceLock::new();
    SIZE_REGEX.get_or_init(|| {
        Regex::new(r"^\d+(?:\.\d+)?x\d+(?:\.\d+)?x\d+(?:\.\d+)?/\d+(?:\.\d+)?/\d+(?:\.\d+)?$")
            .expect("size descriptor pattern is valid")
    })
}

/// Decompose a compact descriptor into `[width, height, depth, thickness, notch]`.
fn parse_size_descriptor(size: &str) -> Option<[f64; 5]> {
    if !size_regex().is_match(size) {
        return None;
    }

    let mut parts = size.splitn(3, '/');
    let dim = parts.next()?;
    let thickness = parts.next()?;
    let notch = parts.next()?;

    let mut dims = dim.splitn(3, 'x');
    let width = dims.next()?;
    let height = dims.next()?;
    let depth = dims.next()?;

    Some([
        coerce_float(width),
        coerce_float(height),
        coerce_float(depth),
        coerce_float(thickness),
        coerce_float(notch),
    ])
}

/// Parse-or-zero string-to-float conversion.
///
/// Parses the longest leading numeric prefix (optional whitespace and sign,
/// digits, optional fraction, optional exponent); text with no numeric
/// prefix yields 0.0. `"6mm"` is 6.0, `"abc"` is 0.0.
pub(crate) fn coerce_float(text: &str) -> f64 {
    let s = text.trim_start();
    let b = s.as_bytes();

    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - digits_start;

    let mut end = i;
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        // "5." and ".5" both carry mantissa digits; "." alone does not
        if j > i + 1 || int_digits > 0 {
            end = j;
        }
    }
    if end == digits_start {
        return 0.0;
    }

    let mantissa_end = end;
    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut k = end + 1;
        if k < b.len() && matches!(b[k], b'+' | b'-') {
            k += 1;
        }
        let exp_digits_start = k;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_digits_start {
            end = k;
        }
    }

    s[..end]
        .parse::<f64>()
        .or_else(|_| s[..mantissa_end].parse::<f64>())
        .unwrap_or(0.0)
}
