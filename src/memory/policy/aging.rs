//! Aging replacement policy.
//!
//! Encodes recency as a decaying counter per frame: every reference first
//! ages the whole table (shift right by elapsed ticks, fold the referenced
//! flag into the high bit), then marks the target frame. Victim selection
//! takes the smallest counter. The global refresh on every reference keeps
//! all counters comparable regardless of access-frequency skew.

use crate::common::{FrameId, Tick};
use crate::memory::policy::EvictionPolicy;
use crate::memory::FrameTable;

/// Decaying-counter approximation of LRU.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aging;

impl Aging {
    /// Age every frame up to `now`.
    ///
    /// Per frame: shift the register right by the ticks elapsed since its
    /// last service (saturating toward zero), fold the referenced flag into
    /// the high bit, clear the flag, stamp the service time.
    fn refresh(table: &mut FrameTable, now: Tick) {
        for frame in table.iter_mut() {
            let elapsed = now.since(frame.last_service());
            frame.decay(elapsed);
            frame.fold_referenced();
            frame.set_referenced(false);
            frame.touch(now);
        }
    }
}

impl EvictionPolicy for Aging {
    fn name(&self) -> &'static str {
        "Aging"
    }

    fn on_reference(&self, table: &mut FrameTable, frame: FrameId, _instruction: u32, now: Tick) {
        Self::refresh(table, now);

        let target = table.frame_mut(frame);
        target.set_referenced(true);
        target.tally_access();
    }

    fn select_victim(&self, table: &mut FrameTable, _now: Tick) -> FrameId {
        table.take_empty_or_select(|f| f.aging())
    }
}
