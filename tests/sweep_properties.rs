//! Integration tests for the sweep driver.
//!
//! These verify the cross-component guarantees the simulator is built
//! around: reproducibility, the fill-first phase, and the shape of the hit
//! rate curve over the swept range.

use pagesim::common::config::{STREAM_LEN, WORKLOAD_SEED};
use pagesim::memory::policy::{Aging, EvictionPolicy, Nru};
use pagesim::memory::{dispatch, Clock, FrameTable};
use pagesim::workload::{run_sweep, run_trial, SweepConfig, Workload};

fn shared_workload() -> Workload {
    Workload::generate(WORKLOAD_SEED)
}

/// After the first N distinct pages fault in, a capacity-N table has no
/// empty frames left.
#[test]
fn test_distinct_pages_exhaust_empty_frames() {
    for capacity in [1, 4, 7, 64] {
        let mut table = FrameTable::new(capacity);
        let mut clock = Clock::new();

        for page in 0..capacity as u32 {
            dispatch(&Aging, &mut table, &mut clock, page * 10, 230);
        }

        assert_eq!(table.empty_count(), 0, "capacity {capacity}");
    }
}

/// Running the full sweep twice produces identical counts at every pool
/// size.
#[test]
fn test_sweep_is_reproducible() {
    let workload = shared_workload();
    let config = SweepConfig::default();

    for policy in [&Nru as &dyn EvictionPolicy, &Aging] {
        let first = run_sweep(policy, &config, &workload).unwrap();
        let second = run_sweep(policy, &config, &workload).unwrap();
        assert_eq!(first, second, "{} sweep must be deterministic", policy.name());
    }
}

/// Both policies consume the identical probe sequence: every trial
/// dispatches the whole stream, at every pool size.
#[test]
fn test_policies_see_identical_probe_volume() {
    let workload = shared_workload();
    let config = SweepConfig::default();

    let nru = run_sweep(&Nru, &config, &workload).unwrap();
    let aging = run_sweep(&Aging, &config, &workload).unwrap();

    assert_eq!(nru.len(), aging.len());
    for (n, a) in nru.iter().zip(&aging) {
        assert_eq!(n.pool_size, a.pool_size);
        assert_eq!(n.stats.total(), STREAM_LEN as u64);
        assert_eq!(a.stats.total(), STREAM_LEN as u64);
    }
}

/// Hit rate trends upward with pool size. The policies are only LRU
/// approximations, so adjacent steps are allowed ties and sub-percent
/// jitter, but the top of the sweep must beat the bottom outright.
#[test]
fn test_hit_rate_trends_up_with_pool_size() {
    const JITTER: u64 = 64; // probes, <0.8% of the stream

    let workload = shared_workload();
    let config = SweepConfig::default();

    for policy in [&Nru as &dyn EvictionPolicy, &Aging] {
        let reports = run_sweep(policy, &config, &workload).unwrap();

        for pair in reports.windows(2) {
            assert!(
                pair[1].stats.hits + JITTER >= pair[0].stats.hits,
                "{}: hits fell from {} (pool {}) to {} (pool {})",
                policy.name(),
                pair[0].stats.hits,
                pair[0].pool_size,
                pair[1].stats.hits,
                pair[1].pool_size,
            );
        }

        let first = reports.first().unwrap().stats.hit_rate();
        let last = reports.last().unwrap().stats.hit_rate();
        assert!(
            last > first,
            "{}: rate must improve across the sweep ({first} -> {last})",
            policy.name()
        );
    }
}

/// A pool far below the working set faults heavily but still hits; a pool
/// that holds the whole working set approaches the first-pass-fill bound.
#[test]
fn test_hit_rate_bands_at_sweep_extremes() {
    let workload = shared_workload();

    for policy in [&Nru as &dyn EvictionPolicy, &Aging] {
        let small = run_trial(policy, 4, &workload);
        let large = run_trial(policy, 1024, &workload);

        let small_rate = small.hit_rate();
        let large_rate = large.hit_rate();

        assert!(
            small_rate > 0.0 && small_rate < 0.7,
            "{}: pool 4 rate {small_rate} out of band",
            policy.name()
        );
        assert!(
            large_rate > 0.85,
            "{}: pool 1024 rate {large_rate} should approach the fill bound",
            policy.name()
        );
        assert!(large_rate > small_rate, "{}", policy.name());
    }
}

/// With capacity at least the working set, every fault is a first-touch
/// fill: fault count equals the number of distinct pages probed.
#[test]
fn test_oversized_pool_faults_once_per_page() {
    let workload = shared_workload();

    let nru = run_trial(&Nru, 1024, &workload);
    let aging = run_trial(&Aging, 1024, &workload);

    // Neither policy evicts when empty frames remain, so the two fault
    // counts are both "distinct pages probed" and must agree exactly.
    assert_eq!(nru.faults, aging.faults);
    assert!(nru.faults <= (STREAM_LEN as u64).div_ceil(10));
}
