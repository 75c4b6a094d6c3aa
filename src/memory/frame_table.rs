//! Frame table - the fixed pool of simulated physical memory.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       FrameTable                         │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │           frames: Vec<Frame> (fixed size)          │  │
//! │  │   [Frame0] [Frame1] [Frame2] [Frame3] ...          │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                     ▲                                    │
//! │        cursor ──────┘  (next frame to fill, wraps)       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The table knows nothing about replacement policy. It owns the two pieces
//! of mechanism both policies share: the fill-empty-slots-first cursor and
//! the leftmost-minimum victim scan, parameterized by a policy-supplied
//! score function.

use crate::common::{FrameId, PageId};
use crate::memory::Frame;

/// A fixed-capacity, ordered pool of [`Frame`]s with a rotation cursor.
///
/// Frames have stable identity: the arena is allocated once per trial and
/// never reallocated, so a [`FrameId`] stays valid for the whole run.
#[derive(Debug)]
pub struct FrameTable {
    /// Fixed arena of frames allocated at trial start.
    frames: Vec<Frame>,

    /// Next frame eligible to be consumed while empty slots remain; once
    /// every frame has been filled it parks on the successor of the last
    /// slot filled and `take_empty` stops yielding.
    cursor: usize,
}

impl FrameTable {
    /// Create a table of `capacity` empty frames, cursor on the first.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            frames: (0..capacity).map(|_| Frame::new()).collect(),
            cursor: 0,
        }
    }

    /// Number of frames in the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames never yet serviced.
    pub fn empty_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_empty()).count()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find the frame holding `page_id`.
    ///
    /// Linear scan returning the first match in storage order. Capacity is
    /// at most ~1k frames, so the scan is cheap and keeps lookup order
    /// deterministic.
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|f| f.page_id() == Some(page_id))
            .map(FrameId::new)
    }

    /// Shared access to a frame.
    #[inline]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.0]
    }

    /// Exclusive access to a frame.
    #[inline]
    pub fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.0]
    }

    /// Iterate frames in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Iterate frames mutably in storage order (policy refresh passes).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Frame> {
        self.frames.iter_mut()
    }

    // ========================================================================
    // Victim selection mechanism
    // ========================================================================

    /// Take the frame under the cursor if it has never been serviced.
    ///
    /// Frames are only ever consumed at the cursor while empty slots remain,
    /// so the pool fills strictly in storage order. Advancing on every
    /// consume means that the moment the last slot is filled, the cursor
    /// has wrapped to the successor of the most recently filled frame, and
    /// from then on this method returns `None` for the rest of the trial.
    ///
    /// The caller is expected to install a page into the returned frame.
    pub fn take_empty(&mut self) -> Option<FrameId> {
        if !self.frames[self.cursor].is_empty() {
            return None;
        }

        let id = FrameId::new(self.cursor);
        self.cursor = (self.cursor + 1) % self.frames.len();
        Some(id)
    }

    /// Frame with the minimum score, leftmost on ties.
    ///
    /// Stable left-to-right scan; the first minimum wins, with no secondary
    /// tie-break. Scores are computed on the current frame state, so any
    /// policy refresh must run before this scan.
    pub fn select_min_by<F>(&self, mut score: F) -> FrameId
    where
        F: FnMut(&Frame) -> u32,
    {
        let mut best = FrameId::new(0);
        let mut best_score = score(&self.frames[0]);

        for (idx, frame) in self.frames.iter().enumerate().skip(1) {
            let s = score(frame);
            if s < best_score {
                best = FrameId::new(idx);
                best_score = s;
            }
        }

        best
    }

    /// The procedure both policies share: prefer an empty frame, else scan
    /// for the qualifying minimum with leftmost tie-break.
    pub fn take_empty_or_select<F>(&mut self, score: F) -> FrameId
    where
        F: FnMut(&Frame) -> u32,
    {
        if let Some(id) = self.take_empty() {
            return id;
        }

        self.select_min_by(score)
    }
}
