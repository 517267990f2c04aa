//! Benchmark runner: times the build's selected dgemv kernel over the
//! configured size sweep and checks every result against the reference.

use dgemv::harness::config::DEFAULT_CONFIG_PATH;
use dgemv::harness::{BenchResult, BenchmarkDriver, ConfigLoader};
use dgemv::{DgemvKernel, SelectedKernel};
use log::error;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("Benchmark failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> BenchResult<()> {
    let path = env::var("DGEMV_BENCH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&path)?;

    let kernel = SelectedKernel::default();
    println!("Description:\t{}\n", kernel.description());

    let mut driver = BenchmarkDriver::new(kernel, config)?;

    let mut failures = 0;
    driver.run_with(|report| {
        println!("{}\n", report);
        if !report.passed() {
            failures += 1;
        }
    });

    println!("{}", "=".repeat(50));
    if failures == 0 {
        println!("All sizes matched the reference.");
    } else {
        println!(
            "{} size(s) differed from the reference beyond tolerance.",
            failures
        );
    }

    Ok(())
}
