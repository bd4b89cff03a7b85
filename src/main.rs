//! # Nyx
//!
//! Evaluates arithmetic expressions from a prompt or a file.
//!

use clap::Parser;
use nyx::term::{self, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nyx", version, about = "Nyx bytecode compiler and virtual machine")]
struct Args {
    /// Script to run; opens a prompt when omitted
    script: Option<PathBuf>,

    /// Print the bytecode listing before running
    #[arg(long)]
    disassemble: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = Config {
        disassemble: args.disassemble,
        color: !args.no_color,
    };
    let status = match args.script {
        Some(path) => term::run_file(&path, config),
        None => term::main(config),
    };
    std::process::exit(status);
}
