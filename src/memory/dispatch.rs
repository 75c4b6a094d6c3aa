//! Access dispatch - one simulated instruction through the frame table.
//!
//! [`dispatch`] is the only path by which the workload touches memory: it
//! derives the page, classifies the access as hit or fault, and drives the
//! policy's reference/victim hooks. Both policies go through this one
//! function, which is what makes their statistics comparable.

use crate::common::config::ADDRESSES_PER_PAGE;
use crate::common::{PageId, Tick};
use crate::memory::policy::EvictionPolicy;
use crate::memory::FrameTable;

/// The logical clock a trial runs on: one tick per dispatched access.
#[derive(Debug, Default)]
pub struct Clock {
    now: u64,
}

impl Clock {
    /// A clock at tick zero; the first access is dispatched at tick 1.
    pub fn new() -> Self {
        Self { now: 0 }
    }

    /// Advance one tick and return the new instant.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.now += 1;
        Tick::new(self.now)
    }

    /// The current instant without advancing.
    #[inline]
    pub fn now(&self) -> Tick {
        Tick::new(self.now)
    }
}

/// Outcome of a single dispatched access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident.
    Hit,
    /// The page had to be faulted in over a victim frame.
    Fault,
}

/// Dispatch one simulated instruction.
///
/// Derives `page = address / ADDRESSES_PER_PAGE`, then:
/// - resident: report the reference to the policy; [`AccessOutcome::Hit`]
/// - absent: ask the policy for a victim, install the page over it (all
///   recency metadata cleared, service time stamped), then report the
///   reference; [`AccessOutcome::Fault`]
///
/// No other side effects: the outcome is a function of (policy, table,
/// address, instruction) plus the clock tick consumed here.
pub fn dispatch(
    policy: &dyn EvictionPolicy,
    table: &mut FrameTable,
    clock: &mut Clock,
    address: u32,
    instruction: u32,
) -> AccessOutcome {
    let now = clock.advance();
    let page = PageId::new(address / ADDRESSES_PER_PAGE);

    match table.find(page) {
        Some(frame) => {
            policy.on_reference(table, frame, instruction, now);
            AccessOutcome::Hit
        }
        None => {
            let victim = policy.select_victim(table, now);
            table.frame_mut(victim).install(page, now);
            policy.on_reference(table, victim, instruction, now);
            AccessOutcome::Fault
        }
    }
}
