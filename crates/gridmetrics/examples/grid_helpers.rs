//! gridmetrics usage examples
//!
//! This example demonstrates the three operations:
//! - Integer square root
//! - Truncated distance between grid points
//! - Two-thirds ratio-threshold check

use gridmetrics::prelude::*;

fn main() -> Result<(), MetricsError> {
    println!("{}", "=".repeat(60));
    println!("gridmetrics examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_integer_sqrt()?;
    example_2_distance()?;
    example_3_ratio_check()?;

    Ok(())
}

/// Example 1: Integer Square Root
/// Demonstrates truncation toward zero from the real square root.
fn example_1_integer_sqrt() -> Result<(), MetricsError> {
    println!("Example 1: Integer Square Root");
    println!("{}", "-".repeat(60));

    for n in [0.0, 4.0, 8.0, 15.0, 16.0, 1_000_000.0] {
        println!("  integer_sqrt({n}) = {}", integer_sqrt(n)?);
    }
    println!();

    Ok(())
}

/// Example 2: Truncated Distance
/// Demonstrates the distance between two (row, col) points.
fn example_2_distance() -> Result<(), MetricsError> {
    println!("Example 2: Truncated Distance");
    println!("{}", "-".repeat(60));

    let points = [
        (0.0, 0.0, 3.0, 4.0),
        (0.0, 0.0, 1.0, 1.0),
        (2.0, 2.0, 2.0, 9.0),
        (-3.0, -4.0, 0.0, 0.0),
    ];

    for (r1, c1, r2, c2) in points {
        println!(
            "  distance(({r1}, {c1}) -> ({r2}, {c2})) = {}",
            distance(r1, c1, r2, c2)?
        );
    }
    println!();

    Ok(())
}

/// Example 3: Ratio Threshold Check
/// Demonstrates the strict two-thirds cutoff.
fn example_3_ratio_check() -> Result<(), MetricsError> {
    println!("Example 3: Ratio Threshold Check");
    println!("{}", "-".repeat(60));

    let pairs = [(2.0, 3.0), (1.0, 3.0), (3.0, 3.0), (17.0, 25.0)];

    for (x, y) in pairs {
        println!(
            "  is_ratio_respected({x}, {y}) = {}",
            is_ratio_respected(x, y)?
        );
    }
    println!();

    Ok(())
}
