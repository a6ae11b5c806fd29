#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod camera;
pub mod handoff;
pub mod overlay;
pub mod stats;
pub mod stream;
pub mod types;

// Demo plumbing – public for the binaries, not part of the stable surface.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: producer-side routing + consumer-side projection.
pub use crate::overlay::{OverlayFrame, OverlayParams, OverlayProjector};
pub use crate::stream::{ResultRouter, RouterParams};

// Shared state between the two sides.
pub use crate::camera::StereoRig;
pub use crate::handoff::LatestSlot;

// Wire-level result types.
pub use crate::types::{Detection, FrameResult, NormalizedBox};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use nalgebra::Isometry3;
/// use stereo_overlay::prelude::*;
///
/// # fn main() {
/// let rig = Arc::new(StereoRig::new());
/// rig.install(CameraRole::Left, CameraParams::default())
///     .expect("camera installs once per role");
///
/// let slot = Arc::new(LatestSlot::new());
/// let router = ResultRouter::new(
///     RouterParams::default(),
///     Arc::clone(&rig),
///     Arc::clone(&slot),
/// );
/// let mut projector = OverlayProjector::new(
///     OverlayParams::default(),
///     LabelTable::default(),
///     slot,
/// );
///
/// router.deliver(FrameResult {
///     stream_id: "stereo_stream_left".into(),
///     frame_index: 0,
///     timestamp_sec: 0.0,
///     received_sec: 0.016,
///     detections: vec![],
/// });
///
/// if let Some(frame) = projector.tick(&Isometry3::identity()) {
///     println!("{}", frame.stats_text);
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::camera::{CameraParams, StereoRig};
    pub use crate::handoff::LatestSlot;
    pub use crate::overlay::{LabelTable, OverlayParams, OverlayProjector};
    pub use crate::stream::{CameraRole, ResultRouter, RouterParams};
    pub use crate::types::{Detection, FrameResult, NormalizedBox};
}

// --- Geometry API (for renderers & advanced users) -------------------------

pub mod geometry {
    // Plane placement and the pose correction feeding it.
    pub use crate::camera::{
        place_plane, pose_from_extrinsics, CameraPose, Extrinsics, Intrinsics, PlanePlacement,
        SensorRect, MIN_PLANE_DEPTH_M,
    };

    // Per-frame overlay output consumed by the renderer.
    pub use crate::overlay::{
        box_to_centered_px, thickness_px, BorderStrips, DetectionOverlay, EdgeStrip, LabelTable,
        OverlayFrame,
    };
}
