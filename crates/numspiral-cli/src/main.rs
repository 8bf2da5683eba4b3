//! numspiral binary
//!
//! Prints the number spiral for a cell count.
//!
//! Usage:
//!   numspiral <count>
//!
//! Environment:
//!   NUMSPIRAL_MARKER     Placeholder for empty cells (default: *)
//!   NUMSPIRAL_SEPARATOR  Printed after every number (default: space)
//!   RUST_LOG             Log filter, logs go to stderr

mod config;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use numspiral_core::{Renderer, SpiralLayout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, Invocation};
use crate::error::CliError;

fn print_usage() {
    eprintln!("numspiral - Print a square spiral of the numbers 0..count");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  numspiral <count>    Spiral of <count> numbers, '*' for unused cells");
    eprintln!("  numspiral --help     Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NUMSPIRAL_MARKER     Placeholder for empty cells (default: *)");
    eprintln!("  NUMSPIRAL_SEPARATOR  Printed after every number (default: space)");
}

fn run(config: CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let layout = SpiralLayout::new(config.count)?;
    tracing::info!(
        count = layout.count(),
        order = layout.order(),
        "rendering spiral"
    );

    let renderer = Renderer::new(config.render);
    renderer.write_to(&layout, out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the grid
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "numspiral=warn,numspiral_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result = CliConfig::from_env().and_then(|invocation| match invocation {
        Invocation::Help => {
            print_usage();
            Ok(())
        }
        Invocation::Run(config) => {
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            run(config, &mut out)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "numspiral failed");
            eprintln!("Error: {}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::from(e.exit_code())
        }
    }
}
