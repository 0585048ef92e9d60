//! boxplan - Laser-Cut Box Configuration Resolver
//!
//! Application entry point: initialize logging, then hand off to the CLI.

use boxplan::{
    cli,
    logging::{init_logging, LogConfig},
    Result,
};

fn main() -> Result<()> {
    let log_config = LogConfig::from_env();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    cli::run_cli()
}
