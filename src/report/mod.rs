// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text reports for finished assemblies.
//!
//! None of this affects the assembly; it only renders an [`Assembly`] and its
//! growth record for people to read.

use crate::assembly::Assembly;
use std::fmt::{self, Write};

/// Render a growth record, breaking the line after every value other than 1.
///
/// Runs of single-character merges stay on one line, so the rhythm of the
/// assembly is visible at a glance:
///
/// ```
/// use superperm::report::format_growth;
///
/// assert_eq!(format_growth(&[1, 1, 4, 1, 1, 1, 5, 1, 1]), "114\n1115\n11");
/// ```
pub fn format_growth(growth: &[usize]) -> String {
    let mut out = String::with_capacity(growth.len() * 2);
    for &value in growth {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", value);
        if value != 1 {
            out.push('\n');
        }
    }
    out
}

/// The full report the binary prints: every merge, the growth record and the
/// final sequence with its length.
pub fn render_report(assembly: &Assembly) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, assembly);
    out
}

fn write_report(out: &mut impl fmt::Write, assembly: &Assembly) -> fmt::Result {
    writeln!(out, "\nBuilding the sequence:")?;
    writeln!(out, "{}", assembly.initial)?;
    for step in &assembly.steps {
        writeln!(out, " + {}", step.permutation)?;
    }

    writeln!(out, "\nSequence growth analysis:")?;
    writeln!(out, "{}", format_growth(&assembly.growth()))?;

    writeln!(out, "\nEfficient sequence, length")?;
    writeln!(out, "{}", render_summary(assembly))
}

/// The final sequence followed by its length.
pub fn render_summary(assembly: &Assembly) -> String {
    format!("{} {}", assembly.sequence, assembly.len())
}
