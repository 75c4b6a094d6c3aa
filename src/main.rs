//! pagesim - fixed sweep of pool sizes under NRU and Aging.
//!
//! Usage: pagesim
//!
//! Takes no arguments: runs the fixed 4..=1024 step-32 sweep for NRU, then
//! for Aging, printing per-trial hit/fault counts and each policy's elapsed
//! wall-clock time. Set RUST_LOG=debug for per-trial diagnostics.

use std::process;
use std::time::Instant;

use pagesim::common::config::WORKLOAD_SEED;
use pagesim::memory::policy::{Aging, EvictionPolicy, Nru};
use pagesim::workload::{run_sweep, SweepConfig, Workload};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> pagesim::Result<()> {
    // One workload for the whole process: every trial of every policy
    // replays the same stream.
    let workload = Workload::generate(WORKLOAD_SEED);
    let config = SweepConfig::default();

    let policies: [&dyn EvictionPolicy; 2] = [&Nru, &Aging];

    for (i, policy) in policies.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let start = Instant::now();
        let reports = run_sweep(*policy, &config, &workload)?;
        let elapsed = start.elapsed();

        for report in &reports {
            println!("Memory pool: {}", report.pool_size);
            println!("{}\t{}", report.policy, report.stats);
        }

        println!("{} time: {} s", policy.name(), elapsed.as_secs());
    }

    Ok(())
}
