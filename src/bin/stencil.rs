//! Stencil CLI Binary
//!
//! Thin shim over the CLI context: parse, init logging, execute, print.

use clap::Parser;
use stencil::logging::{self, LogFormat};
use stencil::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let format = match cli.log_format.as_deref().unwrap_or("text").parse::<LogFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = logging::init(cli.verbose, cli.log_level.as_deref(), format) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
