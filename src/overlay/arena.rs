//! Reusable storage for per-detection overlay geometry.
//!
//! Detection counts fluctuate frame to frame; the arena keeps retired slots
//! on a free-list and hands them back on the next frame, so steady-state
//! ticks reuse allocations (label string buffers included) instead of
//! rebuilding the geometry list.

use super::geometry::DetectionOverlay;

/// Free-list arena of [`DetectionOverlay`] slots.
///
/// `begin_frame` retires every active slot, `acquire` revives one (or grows
/// the arena), and `active` iterates this frame's slots in acquisition
/// order.
#[derive(Debug, Default)]
pub struct OverlayArena {
    slots: Vec<DetectionOverlay>,
    free: Vec<u32>,
    active: Vec<u32>,
}

impl OverlayArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| DetectionOverlay::default()).collect(),
            free: (0..capacity as u32).rev().collect(),
            active: Vec::with_capacity(capacity),
        }
    }

    /// Retires all active slots onto the free-list.
    pub fn begin_frame(&mut self) {
        self.free.extend(self.active.drain(..));
    }

    /// Returns a slot for this frame, reusing a retired one when available.
    /// Slot contents are whatever the previous frame left; callers overwrite
    /// every field they emit.
    pub fn acquire(&mut self) -> &mut DetectionOverlay {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(DetectionOverlay::default());
                (self.slots.len() - 1) as u32
            }
        };
        self.active.push(index);
        &mut self.slots[index as usize]
    }

    /// This frame's overlays in acquisition order.
    pub fn active(&self) -> impl Iterator<Item = &DetectionOverlay> {
        self.active.iter().map(|&index| &self.slots[index as usize])
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Total slots ever allocated, active or retired.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
