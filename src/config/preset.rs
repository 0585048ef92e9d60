//! Loading stored option sets from TOML preset files.
//!
//! A preset holds the same fields as the raw option mapping; the CLI
//! overlays its flags on top, so flags always win over preset values.

use crate::config::resolver::RawOptions;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse a preset from TOML text.
pub fn parse_preset(content: &str) -> Result<RawOptions, PresetError> {
    Ok(toml::from_str(content)?)
}

/// Load a preset file from disk.
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<RawOptions, PresetError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading preset");
    let content = std::fs::read_to_string(path)?;
    parse_preset(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolver::RawValue;

    #[test]
    fn test_parse_full_preset() {
        let toml_content = r#"
units = "in"
page_size = "A4"
width = 10
height = 8.5
depth = "6"
thickness = 0.25
notch = 0.5
file = "box.pdf"
"#;

        let options = parse_preset(toml_content).unwrap();
        assert_eq!(options.units.as_deref(), Some("in"));
        assert_eq!(options.page_size.as_deref(), Some("A4"));
        assert_eq!(options.width, Some(RawValue::Number(10.0)));
        assert_eq!(options.height, Some(RawValue::Number(8.5)));
        assert_eq!(options.depth, Some(RawValue::Text("6".to_string())));
        assert_eq!(options.file.as_deref(), Some("box.pdf"));
    }

    #[test]
    fn test_parse_partial_preset() {
        let options = parse_preset("size = \"300x200x150/4/6\"\n").unwrap();
        assert_eq!(options.size.as_deref(), Some("300x200x150/4/6"));
        assert_eq!(options.width, None);
        assert_eq!(options.units, None);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_preset("width = = 10");
        assert!(matches!(result, Err(PresetError::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_preset("/nonexistent/preset.toml");
        assert!(matches!(result, Err(PresetError::Io(_))));
    }
}
