//! Consumer-side projection: drains the handoff slot and turns the latest
//! result into world-anchored overlay geometry.

use super::arena::OverlayArena;
use super::geometry::{
    box_to_centered_px, thickness_px, BorderStrips, DetectionOverlay, OverlayFrame,
};
use super::labels::LabelTable;
use super::params::OverlayParams;
use crate::camera::{place_plane, CameraParams};
use crate::handoff::LatestSlot;
use crate::stats::RollingStats;
use crate::stream::RoutedResult;
use crate::types::FrameResult;
use log::debug;
use nalgebra::Isometry3;
use std::sync::Arc;
use std::time::Instant;

/// Builds per-frame overlay geometry from routed detection results.
///
/// Owned by the rendering collaborator and driven by [`tick`](Self::tick)
/// once per display frame. Each tick drains at most one result from the
/// handoff slot; frames with nothing pending return `None` and the previous
/// geometry stays valid via [`frame`](Self::frame).
pub struct OverlayProjector {
    params: OverlayParams,
    labels: LabelTable,
    slot: Arc<LatestSlot<RoutedResult>>,
    stats: RollingStats,
    arena: OverlayArena,
    frame: Option<OverlayFrame>,
}

impl OverlayProjector {
    pub fn new(
        params: OverlayParams,
        labels: LabelTable,
        slot: Arc<LatestSlot<RoutedResult>>,
    ) -> Self {
        Self {
            params,
            labels,
            slot,
            stats: RollingStats::new(),
            arena: OverlayArena::new(),
            frame: None,
        }
    }

    /// Drains the slot and projects the pending result, if any.
    ///
    /// `world_from_reference` places the camera reference frame in world
    /// space for this display frame. Statistics are updated for every
    /// drained result, including those that arrived without resolved camera
    /// parameters and therefore produce no geometry.
    pub fn tick(&mut self, world_from_reference: &Isometry3<f32>) -> Option<&OverlayFrame> {
        let routed = self.slot.take()?;
        self.stats.observe(&routed.result);
        let Some(camera) = routed.camera else {
            debug!(
                "OverlayProjector::tick no camera for stream '{}', geometry skipped",
                routed.result.stream_id
            );
            return None;
        };
        self.project(&routed.result, &camera, world_from_reference)
    }

    /// Projects `result` onto the capture-rectangle plane of `camera`.
    ///
    /// Returns `None` when the plane cannot be placed (degenerate
    /// intrinsics); the arena and last frame are left untouched in that
    /// case.
    pub fn project(
        &mut self,
        result: &FrameResult,
        camera: &CameraParams,
        world_from_reference: &Isometry3<f32>,
    ) -> Option<&OverlayFrame> {
        let t0 = Instant::now();
        let plane = place_plane(camera, self.params.plane_depth_m, world_from_reference)?;

        let frame_border_px =
            thickness_px(self.params.frame_line_thickness_m, plane.meters_per_pixel);
        let frame_border = BorderStrips::around(plane.size_px, frame_border_px);

        let [plane_w, plane_h] = plane.size_px;
        let pad = self.params.stats_padding_px;
        let stats_anchor = [-plane_w * 0.5 + pad, plane_h * 0.5 - pad];

        let box_px = thickness_px(self.params.box_line_thickness_m, plane.meters_per_pixel);
        self.arena.begin_frame();
        for detection in &result.detections {
            let (offset, size) = box_to_centered_px(&detection.bbox, plane.size_px);
            let slot = self.arena.acquire();
            slot.anchored_position = offset;
            slot.size_px = size;
            slot.border_px = box_px;
            slot.border = BorderStrips::around(size, box_px);
            slot.label_anchor = [-size[0] * 0.5, -size[1] * 0.5 - 2.0 * box_px];
            slot.label.clear();
            slot.label.push_str(self.labels.name(detection.class_id));
            slot.class_id = detection.class_id;
            slot.score = detection.score;
        }

        self.frame = Some(OverlayFrame {
            frame_index: result.frame_index,
            plane,
            frame_border_px,
            frame_border,
            stats_anchor,
            stats_text: self.stats.summary(),
        });

        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "OverlayProjector::project frame={} overlays={} elapsed_ms={:.3}",
            result.frame_index,
            self.arena.active_len(),
            elapsed_ms
        );
        self.frame.as_ref()
    }

    /// Geometry from the most recent successful projection.
    pub fn frame(&self) -> Option<&OverlayFrame> {
        self.frame.as_ref()
    }

    /// Per-detection overlays for the most recent successful projection, in
    /// result order.
    pub fn detections(&self) -> impl Iterator<Item = &DetectionOverlay> {
        self.arena.active()
    }

    /// Rolling latency/rate statistics over all drained results.
    pub fn stats(&self) -> &RollingStats {
        &self.stats
    }
}
