//! Command-line interface for boxplan
//!
//! Collects box parameters from flags (and an optional TOML preset),
//! resolves them into a validated configuration, and prints the result
//! for the downstream layout/rendering stage.

use crate::config::preset;
use crate::config::resolver::{RawOptions, RawValue, ResolvedConfig};
use crate::{pages, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// boxplan command-line interface
///
/// Dimension flags accept raw text; numeric coercion is owned by the
/// resolver, not the flag parser.
#[derive(Parser, Debug)]
#[command(name = "boxplan")]
#[command(about = "Resolve laser-cut box parameters into a validated cut-plan configuration")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "BoxPlan Team")]
pub struct BoxPlanCli {
    /// Box width
    #[arg(short = 'w', long)]
    pub width: Option<String>,

    /// Box height
    #[arg(short = 'H', long)]
    pub height: Option<String>,

    /// Box depth
    #[arg(short = 'd', long)]
    pub depth: Option<String>,

    /// Material thickness
    #[arg(short = 't', long)]
    pub thickness: Option<String>,

    /// Notch (tab) length along the panel edges
    #[arg(short = 'n', long)]
    pub notch: Option<String>,

    /// Margin from the page edge
    #[arg(short = 'm', long)]
    pub margin: Option<String>,

    /// Padding between panels on the page
    #[arg(short = 'p', long)]
    pub padding: Option<String>,

    /// Cut line stroke width
    #[arg(short = 's', long)]
    pub stroke: Option<String>,

    /// Compact size descriptor WxHxD/THICKNESS/NOTCH (e.g. "300x200x150/4/6")
    #[arg(short = 'z', long)]
    pub size: Option<String>,

    /// Unit system (mm or in)
    #[arg(short = 'u', long)]
    pub units: Option<String>,

    /// Named page size (e.g. LETTER, A4)
    #[arg(short = 'P', long)]
    pub page_size: Option<String>,

    /// Page orientation (portrait or landscape)
    #[arg(short = 'L', long)]
    pub page_layout: Option<String>,

    /// Output PDF file path
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// TOML preset file; flags overlay preset values
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// List all known page sizes in the active units and exit
    #[arg(short = 'l', long)]
    pub list_all_page_sizes: bool,

    /// Emit the resolved configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl BoxPlanCli {
    /// Convert the dimension and page flags into a raw option mapping.
    pub fn to_raw_options(&self) -> RawOptions {
        let text = |v: &Option<String>| v.as_ref().map(|s| RawValue::Text(s.clone()));

        RawOptions {
            width: text(&self.width),
            height: text(&self.height),
            depth: text(&self.depth),
            thickness: text(&self.thickness),
            notch: text(&self.notch),
            margin: text(&self.margin),
            padding: text(&self.padding),
            stroke: text(&self.stroke),
            size: self.size.clone(),
            units: self.units.clone(),
            page_size: self.page_size.clone(),
            page_layout: self.page_layout.clone(),
            file: self.file.clone(),
        }
    }
}

/// Resolve the options from a parsed command line and print the result.
pub fn execute(cli: &BoxPlanCli) -> Result<()> {
    let mut options = cli.to_raw_options();

    if let Some(path) = &cli.preset {
        let preset_options = preset::load_preset(path)?;
        options = preset_options.overlay(options);
    }

    let config = ResolvedConfig::new(options);

    if cli.list_all_page_sizes {
        print!("{}", config.describe_page_sizes(pages::PAGE_SIZES));
        return Ok(());
    }

    config.validate()?;
    info!(units = %config.units, page_size = %config.page_size, "configuration resolved");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render_summary(&config));
    }

    Ok(())
}

/// Run the CLI interface
pub fn run_cli() -> Result<()> {
    let cli = BoxPlanCli::parse();

    if cli.verbose {
        debug!("Verbose output enabled");
    }

    if let Err(e) = execute(&cli) {
        if cli.json {
            let error_json = serde_json::json!({
                "error": true,
                "message": e.to_string()
            });
            println!("{}", serde_json::to_string_pretty(&error_json)?);
        } else {
            error!("Command failed: {}", e);
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Human-readable rendering of a resolved configuration.
fn render_summary(config: &ResolvedConfig) -> String {
    let dim = |v: Option<f64>| match v {
        Some(n) => format!("{} {}", n, config.units),
        None => "-".to_string(),
    };

    let mut out = String::new();
    out.push_str("Resolved box configuration:\n");
    out.push_str(&format!("  width:     {}\n", dim(config.width)));
    out.push_str(&format!("  height:    {}\n", dim(config.height)));
    out.push_str(&format!("  depth:     {}\n", dim(config.depth)));
    out.push_str(&format!("  thickness: {}\n", dim(config.thickness)));
    out.push_str(&format!("  notch:     {}\n", dim(config.notch)));
    out.push_str(&format!("  margin:    {}\n", dim(config.margin)));
    out.push_str(&format!("  padding:   {}\n", dim(config.padding)));
    out.push_str(&format!("  stroke:    {}\n", dim(config.stroke)));
    out.push_str(&format!(
        "  page:      {} ({})\n",
        config.page_size, config.page_layout
    ));
    out.push_str(&format!(
        "  file:      {}\n",
        config.file.as_deref().unwrap_or("-")
    ));
    out
}
