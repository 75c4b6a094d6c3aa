//! Not-Recently-Used replacement policy.
//!
//! Classifies frames into four classes by the (referenced, modified) pair,
//! rank `referenced * 2 + modified`, and evicts from the lowest class.
//! "Recent" status ages out: frames unserviced for longer than the staleness
//! window lose their referenced flag before each selection.

use crate::common::config::{NRU_STALENESS_TICKS, WRITE_INSTRUCTION_REMAINDER};
use crate::common::{FrameId, Tick};
use crate::memory::policy::EvictionPolicy;
use crate::memory::FrameTable;

/// Not Recently Used, 4-class referenced/modified ranking.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nru;

/// Eviction rank of a frame: class 0 evicts first, class 3 last.
fn rank(referenced: bool, modified: bool) -> u32 {
    referenced as u32 * 2 + modified as u32
}

impl Nru {
    /// Clear the referenced flag of every frame that has gone more than
    /// [`NRU_STALENESS_TICKS`] ticks without service.
    fn refresh(table: &mut FrameTable, now: Tick) {
        for frame in table.iter_mut() {
            if now.since(frame.last_service()) > NRU_STALENESS_TICKS {
                frame.set_referenced(false);
            }
        }
    }
}

impl EvictionPolicy for Nru {
    fn name(&self) -> &'static str {
        "NRU"
    }

    fn on_reference(&self, table: &mut FrameTable, frame: FrameId, instruction: u32, _now: Tick) {
        let target = table.frame_mut(frame);
        target.set_referenced(true);
        if instruction % 10 == WRITE_INSTRUCTION_REMAINDER {
            target.mark_modified();
        }
    }

    fn select_victim(&self, table: &mut FrameTable, now: Tick) -> FrameId {
        Self::refresh(table, now);
        table.take_empty_or_select(|f| rank(f.referenced(), f.modified()))
    }
}
