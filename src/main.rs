//! Wiring diagram CLI entry point.

use std::{path::Path, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, error, info};

use tierwire::{PDF_FILE, PNG_FILE};

/// Command-line arguments.
///
/// The render itself takes no options; the diagram, output names, and
/// resolution are fixed. Only diagnostic logging is configurable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting tierwire");

    if let Err(err) = tierwire::run(Path::new(".")) {
        error!(err:err; "Render failed");
        process::exit(1);
    }

    println!("Diagram saved as '{PNG_FILE}' and '{PDF_FILE}'");
    println!("You can now include the image in your LaTeX document using:");
    println!("\\includegraphics[width=\\textwidth]{{{PNG_FILE}}}");
}
