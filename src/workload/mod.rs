//! Workload generation and the sweep driver.
//!
//! # Components
//! - [`Lcg`] - the deterministic generator behind stream and probes
//! - [`Workload`] - the shared, immutable instruction stream
//! - [`ProbeSequence`] - per-trial probe order, identical across trials
//! - [`run_trial`] / [`run_sweep`] - the drivers that produce statistics

mod driver;
mod probe;
mod rng;
mod stream;

pub use driver::{run_sweep, run_trial, SweepConfig, TrialReport};
pub use probe::ProbeSequence;
pub use rng::Lcg;
pub use stream::Workload;
