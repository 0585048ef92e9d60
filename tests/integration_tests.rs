//! Integration tests for boxplan
//! Exercises the preset -> flags -> resolution -> validation path end to end

use boxplan::cli::BoxPlanCli;
use boxplan::config::{load_preset, RawOptions, RawValue, ResolvedConfig};
use boxplan::pages;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_preset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{}", content).expect("write preset");
    file
}

#[test]
fn test_resolve_from_preset_file_with_flag_overlay() {
    let preset_file = write_preset("units = \"in\"\nsize = \"10x8x6/0.25/0.5\"\n");

    let preset = load_preset(preset_file.path()).unwrap();
    let flags = RawOptions {
        margin: Some(RawValue::Text("0.5".to_string())),
        file: Some("box.pdf".to_string()),
        ..Default::default()
    };
    let config = ResolvedConfig::new(preset.overlay(flags));

    assert_eq!(config.units, "in");
    assert_eq!(config.width, Some(10.0));
    assert_eq!(config.height, Some(8.0));
    assert_eq!(config.depth, Some(6.0));
    assert_eq!(config.thickness, Some(0.25));
    assert_eq!(config.notch, Some(0.5));

    // the flag wins over the unit default, the rest fill in
    assert_eq!(config.margin, Some(0.5));
    assert_eq!(config.padding, Some(0.1));
    assert_eq!(config.stroke, Some(0.001));

    assert!(config.validate().is_ok());
}

#[test]
fn test_flag_overlays_preset_value() {
    let preset_file = write_preset("width = 100\nunits = \"mm\"\n");

    let preset = load_preset(preset_file.path()).unwrap();
    let flags = RawOptions {
        width: Some(RawValue::Text("250".to_string())),
        ..Default::default()
    };
    let config = ResolvedConfig::new(preset.overlay(flags));

    assert_eq!(config.width, Some(250.0));
    assert_eq!(config.units, "mm");
}

#[test]
fn test_cli_flow_with_preset_file() {
    let preset_file = write_preset("size = \"300x200x150/4/6\"\n");
    let preset_path = preset_file.path().to_str().unwrap().to_string();

    let cli = BoxPlanCli::try_parse_from([
        "boxplan",
        "--preset",
        &preset_path,
        "--file",
        "box.pdf",
    ])
    .unwrap();

    let preset = load_preset(cli.preset.as_ref().unwrap()).unwrap();
    let config = ResolvedConfig::new(preset.overlay(cli.to_raw_options()));

    assert_eq!(config.width, Some(300.0));
    assert_eq!(config.file.as_deref(), Some("box.pdf"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_error_surfaces_all_missing_fields() {
    let config = ResolvedConfig::new(RawOptions {
        width: Some(RawValue::Number(10.0)),
        height: Some(RawValue::Number(10.0)),
        depth: Some(RawValue::Number(10.0)),
        thickness: Some(RawValue::Number(4.0)),
        ..Default::default()
    });

    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "notch, file are required, but missing.");
}

#[test]
fn test_json_output_shape() {
    let config = ResolvedConfig::new(RawOptions {
        size: Some("300x200x150/4/6".to_string()),
        file: Some("box.pdf".to_string()),
        ..Default::default()
    });

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["width"], 300.0);
    assert_eq!(json["units"], "mm");
    assert_eq!(json["page_size"], "LETTER");
    assert_eq!(json["file"], "box.pdf");
    // decomposed descriptor is not carried into the output
    assert!(json.get("size").is_none());

    let round_tripped: ResolvedConfig = serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped, config);
}

#[test]
fn test_page_size_listing_in_inches() {
    let config = ResolvedConfig::new(RawOptions {
        units: Some("in".to_string()),
        ..Default::default()
    });
    let listing = config.describe_page_sizes(pages::PAGE_SIZES);

    assert!(listing.contains("\t    LETTER:\t   8.5 x   11.0\n"));
    assert!(listing.contains("\t        A4:\t   8.3 x   11.7\n"));
    assert_eq!(listing.lines().filter(|l| !l.is_empty()).count(), pages::PAGE_SIZES.len());
}
