//! World-anchored overlay geometry for detection results.
//!
//! Overview
//! - [`OverlayProjector`] drains the handoff slot once per display frame,
//!   updates rolling statistics and emits an [`OverlayFrame`]: the placed
//!   capture-rectangle plane, its border strips and the stats text block.
//! - Per-detection geometry ([`DetectionOverlay`]) is kept in a free-list
//!   arena so steady-state ticks reuse allocations.
//! - All positions are center-relative with y up; normalized image boxes
//!   (y down) are flipped during conversion.
//!
//! Modules
//! - [`params`] – projector configuration.
//! - `labels` – class-id to name lookup.
//! - `geometry` – strips, box conversion and frame output types.
//! - `arena` – reusable per-detection slot storage.
//! - `projector` – the per-tick driver.

pub mod arena;
pub mod geometry;
pub mod labels;
pub mod params;
pub mod projector;

#[cfg(test)]
mod tests;

pub use arena::OverlayArena;
pub use geometry::{
    box_to_centered_px, thickness_px, BorderStrips, DetectionOverlay, EdgeStrip, OverlayFrame,
};
pub use labels::LabelTable;
pub use params::OverlayParams;
pub use projector::OverlayProjector;
