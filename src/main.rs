// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the greedy superpermutation assembler.
//!
//! ```text
//! superperm 4            # full report for the alphabet ABCD
//! superperm 5 --quiet    # just the sequence and its length
//! superperm 6 --verify   # also check every permutation is covered
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=superperm=debug`); stdout carries only the report.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use superperm::cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("superperm: {}", err);
            ExitCode::FAILURE
        }
    }
}
