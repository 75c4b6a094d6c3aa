//! Trial and sweep driver.
//!
//! A trial runs one (policy, pool size) combination over the shared
//! workload; a sweep runs one trial per pool size. Every trial gets a fresh
//! frame table and clock - stale state from an earlier trial would bias the
//! counts - while the workload is shared read-only.

use log::debug;

use crate::common::config::{SWEEP_MAX_FRAMES, SWEEP_MIN_FRAMES, SWEEP_STEP};
use crate::common::{Error, Result};
use crate::memory::policy::EvictionPolicy;
use crate::memory::{dispatch, Clock, FrameTable, TrialStats};
use crate::workload::{ProbeSequence, Workload};

/// Run a single trial: one policy, one pool size, the shared workload.
///
/// Probes the stream in the reproducible per-trial order, dispatching each
/// probe as `(address = index, instruction = stream[index])`.
///
/// # Panics
/// Panics if `pool_size` is 0 (see [`FrameTable::new`]).
pub fn run_trial(policy: &dyn EvictionPolicy, pool_size: usize, workload: &Workload) -> TrialStats {
    let mut table = FrameTable::new(pool_size);
    let mut clock = Clock::new();
    let mut stats = TrialStats::new();

    for idx in ProbeSequence::new(workload.len()) {
        let outcome = dispatch(
            policy,
            &mut table,
            &mut clock,
            idx as u32,
            workload.instruction(idx),
        );
        stats.record(outcome);
    }

    stats
}

/// The range of pool sizes a sweep visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Smallest pool size, inclusive.
    pub min_frames: usize,

    /// Largest pool size the sweep may reach, inclusive.
    pub max_frames: usize,

    /// Pool-size increment between trials.
    pub step: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_frames: SWEEP_MIN_FRAMES,
            max_frames: SWEEP_MAX_FRAMES,
            step: SWEEP_STEP,
        }
    }
}

impl SweepConfig {
    /// Check the configuration describes at least one runnable trial.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(Error::ZeroStep);
        }
        if self.min_frames == 0 {
            return Err(Error::ZeroPoolSize);
        }
        if self.min_frames > self.max_frames {
            return Err(Error::EmptySweep {
                min: self.min_frames,
                max: self.max_frames,
            });
        }

        Ok(())
    }

    /// The pool sizes the sweep visits, in order.
    pub fn pool_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (self.min_frames..=self.max_frames).step_by(self.step.max(1))
    }
}

/// Outcome of one trial within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialReport {
    /// Number of frames the trial ran with.
    pub pool_size: usize,

    /// Name of the policy under test.
    pub policy: &'static str,

    /// Hit/fault counts for the trial.
    pub stats: TrialStats,
}

/// Sweep one policy across every configured pool size.
///
/// Trials run serially, each with fresh state, and the sweep always runs to
/// completion.
pub fn run_sweep(
    policy: &dyn EvictionPolicy,
    config: &SweepConfig,
    workload: &Workload,
) -> Result<Vec<TrialReport>> {
    config.validate()?;

    let mut reports = Vec::new();
    for pool_size in config.pool_sizes() {
        let stats = run_trial(policy, pool_size, workload);
        debug!(
            "{} pool={} hits={} faults={}",
            policy.name(),
            pool_size,
            stats.hits,
            stats.faults
        );
        reports.push(TrialReport {
            pool_size,
            policy: policy.name(),
            stats,
        });
    }

    Ok(reports)
}
