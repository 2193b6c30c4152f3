// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for report rendering.

use superperm::assemble;
use superperm::report::{format_growth, render_report, render_summary};

#[test]
fn test_four_letter_growth_analysis() {
    let assembly = assemble(4).unwrap();
    assert_eq!(
        format_growth(&assembly.growth()),
        "1112\n1112\n1113\n1112\n1112\n111"
    );
}

#[test]
fn test_four_letter_report() {
    let assembly = assemble(4).unwrap();
    let report = render_report(&assembly);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Building the sequence:");
    assert_eq!(lines[2], "ABCD");
    assert_eq!(lines[3], " + BCDA");
    let merges = lines.iter().filter(|line| line.starts_with(" + ")).count();
    assert_eq!(merges, 23);
    assert_eq!(
        lines.last(),
        Some(&"ABCDABCADBCABDCABACDBACBDACBADCBA 33")
    );
}

#[test]
fn test_summary() {
    let assembly = assemble(2).unwrap();
    assert_eq!(render_summary(&assembly), "ABA 3");
}
