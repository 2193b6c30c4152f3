// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line arguments and the work behind them.
//!
//! The binary only parses a [`Cli`], installs logging and prints what
//! [`run`] returns, so everything here can be exercised without a process.

use clap::Parser;
use tracing::info;

use crate::alphabet::DEFAULT_MAX_LETTERS;
use crate::assembly::{verify_coverage, Assembler};
use crate::config::{parse_letters, AssemblyConfig};
use crate::error::AssemblyError;
use crate::report::{render_report, render_summary};

#[derive(Debug, Parser)]
#[command(name = "superperm")]
#[command(
    about = "Greedily build a short string containing every permutation of the first N letters"
)]
pub struct Cli {
    /// Number of letters N (the alphabet is A, B, C, ...)
    #[arg(allow_negative_numbers = true)]
    pub letters: String,

    /// Refuse letter counts above this (work grows roughly as (N!)^2)
    #[arg(long, env = "SUPERPERM_MAX_LETTERS", default_value_t = DEFAULT_MAX_LETTERS)]
    pub max_letters: usize,

    /// Print only the final sequence and its length
    #[arg(long, short)]
    pub quiet: bool,

    /// Check that every permutation occurs in the result
    #[arg(long)]
    pub verify: bool,
}

/// Validate the arguments, assemble, and render the text to print.
pub fn run(cli: &Cli) -> Result<String, AssemblyError> {
    let letters = parse_letters(&cli.letters)?;
    let config = AssemblyConfig::new(letters).with_max_letters(cli.max_letters);
    let alphabet = config.validate()?;

    info!(alphabet = %alphabet, "assembling");
    let assembly = Assembler::new(&alphabet).run();

    if cli.verify {
        verify_coverage(&assembly.sequence, &alphabet)?;
        info!("every permutation is covered");
    }

    for (name, value) in assembly.statistics.entries() {
        info!(counter = name, value, "statistics");
    }

    if cli.quiet {
        Ok(format!("{}\n", render_summary(&assembly)))
    } else {
        Ok(render_report(&assembly))
    }
}
