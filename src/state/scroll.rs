//! Scroll State Module
//!
//! Tracks the page's vertical scroll offset between events:
//! - Last-known offset (owned by the tracker, starts at 0)
//! - Direction of travel per sample
//! - Clamping of negative offsets from elastic-scroll platforms
//!
//! Sampling is deliberately stateful: every call overwrites the previous
//! offset, so replaying the same offset twice yields `ScrollDirection::None`
//! the second time.

use crate::types::ScrollDirection;

// =============================================================================
// SCROLL SAMPLE
// =============================================================================

/// One observation of the page scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSample {
    /// Current vertical offset in pixels.
    pub offset: u32,
    /// Offset observed by the previous sample.
    pub previous_offset: u32,
}

impl ScrollSample {
    pub fn new(offset: u32, previous_offset: u32) -> Self {
        Self {
            offset,
            previous_offset,
        }
    }

    /// Direction of travel since the previous sample.
    pub fn direction(&self) -> ScrollDirection {
        match self.offset.cmp(&self.previous_offset) {
            std::cmp::Ordering::Greater => ScrollDirection::Down,
            std::cmp::Ordering::Less => ScrollDirection::Up,
            std::cmp::Ordering::Equal => ScrollDirection::None,
        }
    }
}

// =============================================================================
// SCROLL TRACKER
// =============================================================================

/// Owns the last-known scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    previous_offset: u32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw offset from the host and return the resulting sample.
    ///
    /// Negative offsets clamp to 0; offsets beyond `u32::MAX` saturate.
    pub fn sample(&mut self, raw_offset: i64) -> ScrollSample {
        let offset = raw_offset.clamp(0, u32::MAX as i64) as u32;
        let sample = ScrollSample::new(offset, self.previous_offset);
        self.previous_offset = offset;
        sample
    }

    /// Offset recorded by the most recent sample.
    pub fn last_offset(&self) -> u32 {
        self.previous_offset
    }

    /// Forget the last offset (back to the top of a fresh page).
    pub fn reset(&mut self) {
        self.previous_offset = 0;
    }
}
