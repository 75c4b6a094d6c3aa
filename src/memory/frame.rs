//! Frame - a slot of simulated physical memory.
//!
//! A [`Frame`] holds the identity of its resident page plus the metadata the
//! replacement policies work from:
//! - Referenced/modified flags
//! - The aging shift register (which doubles as an access tally)
//! - The tick at which the frame was last serviced

use crate::common::config::AGING_REFERENCED_BIT;
use crate::common::{PageId, Tick};

/// A frame in the simulated memory pool.
///
/// Frames are the "slots" of physical memory. Each frame can hold one page.
/// The pool has a fixed number of frames allocated at trial start.
///
/// A frame's page is `None` only if the frame has never been serviced in
/// this run: pages are only ever overwritten, never removed.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Which page is currently resident, or None if the frame is empty.
    page_id: Option<PageId>,

    /// Referenced since the policy last looked.
    referenced: bool,

    /// Written to since the page was installed.
    modified: bool,

    /// Aging shift register. The low bits carry an access tally, bit
    /// [`AGING_REFERENCED_BIT`] is where the referenced flag is folded in.
    aging: u32,

    /// Tick of the last install or refresh touching this frame.
    last_service: Tick,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            page_id: None,
            referenced: false,
            modified: false,
            aging: 0,
            last_service: Tick::ZERO,
        }
    }

    // ========================================================================
    // Residency
    // ========================================================================

    /// The resident page, if any.
    #[inline]
    pub fn page_id(&self) -> Option<PageId> {
        self.page_id
    }

    /// Check if the frame is empty (never serviced).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_id.is_none()
    }

    /// Install a page, clearing all recency metadata.
    ///
    /// Called on every fault after victim selection, for empty and occupied
    /// frames alike.
    pub fn install(&mut self, page_id: PageId, now: Tick) {
        self.page_id = Some(page_id);
        self.referenced = false;
        self.modified = false;
        self.aging = 0;
        self.last_service = now;
    }

    // ========================================================================
    // Recency flags
    // ========================================================================

    /// Check the referenced flag.
    #[inline]
    pub fn referenced(&self) -> bool {
        self.referenced
    }

    /// Set or clear the referenced flag.
    #[inline]
    pub fn set_referenced(&mut self, referenced: bool) {
        self.referenced = referenced;
    }

    /// Check the modified flag.
    #[inline]
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// Mark the frame as modified (written to).
    #[inline]
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    // ========================================================================
    // Aging counter
    // ========================================================================

    /// Current value of the aging shift register.
    #[inline]
    pub fn aging(&self) -> u32 {
        self.aging
    }

    /// Shift the register right by `elapsed` bit positions.
    ///
    /// Saturates to zero: a frame untouched for longer than the register is
    /// wide decays all the way down.
    #[inline]
    pub fn decay(&mut self, elapsed: u64) {
        self.aging = u32::try_from(elapsed)
            .ok()
            .and_then(|bits| self.aging.checked_shr(bits))
            .unwrap_or(0);
    }

    /// Fold the referenced flag into the register's high bit.
    #[inline]
    pub fn fold_referenced(&mut self) {
        self.aging |= (self.referenced as u32) << AGING_REFERENCED_BIT;
    }

    /// Bump the access tally carried in the register's low bits.
    #[inline]
    pub fn tally_access(&mut self) {
        self.aging = self.aging.saturating_add(1);
    }

    // ========================================================================
    // Service time
    // ========================================================================

    /// Tick of the last install or refresh.
    #[inline]
    pub fn last_service(&self) -> Tick {
        self.last_service
    }

    /// Record a refresh at `now`.
    #[inline]
    pub fn touch(&mut self, now: Tick) {
        self.last_service = now;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
