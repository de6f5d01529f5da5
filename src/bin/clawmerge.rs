//! Clawmerge CLI Binary
//!
//! Merges the OpenClaw override fragment into a config file and prints `merged`.

use clap::Parser;
use clawmerge::cli::{map_error, Cli, RunContext};
use clawmerge::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Settings must load before logging can be configured
    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(context.logging()) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    info!("Clawmerge starting");

    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
