//! pagesim - a physical-memory simulator with swappable page-replacement
//! policies.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           pagesim                              │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │              Workload Driver (workload/)                 │  │
//! │  │    Lcg → Workload (shared, read-only)                    │  │
//! │  │    ProbeSequence (reseeded per trial) → run_sweep        │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                              ↓                                 │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │              Access Dispatch (memory/)                   │  │
//! │  │    address → page → find → Hit | Fault → TrialStats      │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                              ↓                                 │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │    Frame Table (memory/)  [Policy Swappable]             │  │
//! │  │   ┌──────────────────────────────────────────────────┐   │  │
//! │  │   │    Eviction Policies: Aging | NRU                │   │  │
//! │  │   └──────────────────────────────────────────────────┘   │  │
//! │  │    Vec<Frame> arena + rotation cursor                    │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Tick, Error, config)
//! - [`memory`] - Frames, the frame table, dispatch and statistics
//! - [`workload`] - Stream generation, probe sequences, the sweep driver
//!
//! # Quick Start
//! ```
//! use pagesim::memory::policy::Nru;
//! use pagesim::workload::{run_trial, Workload};
//!
//! let workload = Workload::generate(pagesim::common::config::WORKLOAD_SEED);
//! let stats = run_trial(&Nru, 64, &workload);
//!
//! assert_eq!(stats.total(), workload.len() as u64);
//! ```

// Core modules
pub mod common;
pub mod memory;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result, Tick};
pub use memory::policy::{Aging, EvictionPolicy, Nru};
pub use memory::{dispatch, AccessOutcome, Clock, Frame, FrameTable, TrialStats};
pub use workload::{run_sweep, run_trial, SweepConfig, TrialReport, Workload};
