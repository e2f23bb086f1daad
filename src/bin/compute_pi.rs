// SPDX-License-Identifier: AGPL-3.0-only

//! Compute and print π to a configurable number of decimal places.
//!
//! Run: cargo run --release --bin compute_pi -- --digits=1000000
//!
//! Flags:
//!   --digits=N      decimal places to print (default 1000000)
//!   --iterations=N  override the derived recurrence iteration count

use std::process;
use std::time::Instant;

use quartic_pi::{compute_pi_with, render, Phase, PiConfig, PiError, RenderLayout};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let digits: i64 = args
        .iter()
        .find(|a| a.starts_with("--digits="))
        .and_then(|a| a.strip_prefix("--digits=")?.parse().ok())
        .unwrap_or(1_000_000);
    let iterations: Option<u32> = args
        .iter()
        .find(|a| a.starts_with("--iterations="))
        .and_then(|a| a.strip_prefix("--iterations=")?.parse().ok());

    if let Err(err) = run(digits, iterations) {
        eprintln!("fatal: {err}");
        process::exit(1);
    }
}

fn run(digits: i64, iterations: Option<u32>) -> Result<(), PiError> {
    let start = Instant::now();

    // Fail fast on a non-positive digit count, before any arithmetic.
    let digits = u64::try_from(digits).map_err(|_| PiError::InvalidDigitCount)?;
    let mut config = PiConfig::new(digits)?;
    if let Some(n) = iterations {
        config = config.with_iterations(n);
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  quartic-pi — Borwein quartic recurrence                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("  Digits:     {}", config.digits);
    println!("  Precision:  {} bits", config.precision_bits);
    println!("  Iterations: {}", config.iterations);
    println!();

    let pi = compute_pi_with(&config, |report| {
        let ms = report.elapsed.as_millis();
        match report.phase {
            Phase::Initialization => {
                println!("Initializing: sqrt2 y_prev a_prev ({ms} ms)");
                println!("Iterations:");
            }
            Phase::Iteration(i) => println!("{i:>4}: ({ms} ms)"),
            Phase::Inversion => println!("Inverting: ({ms} ms)"),
            _ => {}
        }
    })?;

    let text = render(&pi, config.digits, &RenderLayout::default())?;
    println!();
    print!("{text}");
    println!();
    println!(
        "Done! Total compute time = {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
