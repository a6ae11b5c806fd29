//! Overlay geometry descriptors emitted for the rendering collaborator.
//!
//! All anchors are expressed relative to the owning rectangle's center with
//! y growing upward (overlay space). Detection boxes arrive in image-fraction
//! coordinates with y growing downward, so the conversion flips the vertical
//! axis.

use crate::camera::PlanePlacement;
use crate::types::NormalizedBox;
use serde::Serialize;

/// One axis-aligned bar of a border rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStrip {
    /// Strip center relative to the rectangle center, pixels.
    pub anchored_position: [f32; 2],
    pub size_px: [f32; 2],
}

/// Four edge strips outlining a rectangle from inside its bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderStrips {
    pub top: EdgeStrip,
    pub bottom: EdgeStrip,
    pub left: EdgeStrip,
    pub right: EdgeStrip,
}

impl BorderStrips {
    /// Strips outlining a `size_px` rectangle with bars of `thickness_px`,
    /// inset so the outline stays inside the rectangle bounds.
    pub fn around(size_px: [f32; 2], thickness_px: f32) -> Self {
        let [w, h] = size_px;
        let half_t = thickness_px * 0.5;
        Self {
            top: EdgeStrip {
                anchored_position: [0.0, h * 0.5 - half_t],
                size_px: [w, thickness_px],
            },
            bottom: EdgeStrip {
                anchored_position: [0.0, -h * 0.5 + half_t],
                size_px: [w, thickness_px],
            },
            left: EdgeStrip {
                anchored_position: [-w * 0.5 + half_t, 0.0],
                size_px: [thickness_px, h],
            },
            right: EdgeStrip {
                anchored_position: [w * 0.5 - half_t, 0.0],
                size_px: [thickness_px, h],
            },
        }
    }
}

/// Converts a configured line thickness in meters to whole overlay pixels,
/// never thinner than one pixel.
pub fn thickness_px(thickness_m: f32, meters_per_pixel: f32) -> f32 {
    (thickness_m / meters_per_pixel).round().max(1.0)
}

/// Converts a normalized detection box to a centered pixel offset and size
/// on a plane of `size_px`. The vertical axis is flipped: image-space y
/// grows downward, overlay-space y grows upward.
pub fn box_to_centered_px(bbox: &NormalizedBox, size_px: [f32; 2]) -> ([f32; 2], [f32; 2]) {
    let [image_w, image_h] = size_px;
    let offset = [(bbox.x - 0.5) * image_w, (0.5 - bbox.y) * image_h];
    let size = [bbox.w * image_w, bbox.h * image_h];
    (offset, size)
}

/// Complete overlay geometry for one detection box.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOverlay {
    /// Box center relative to the plane center, pixels.
    pub anchored_position: [f32; 2],
    pub size_px: [f32; 2],
    /// Border bar thickness, pixels.
    pub border_px: f32,
    /// Border strips relative to the box center.
    pub border: BorderStrips,
    /// Label top-left pivot relative to the box center: below the
    /// bottom-left corner, offset down by twice the border thickness.
    pub label_anchor: [f32; 2],
    pub label: String,
    pub class_id: i32,
    pub score: f32,
}

impl DetectionOverlay {
    /// Display caption, `"{label} ({score})"` with two decimals.
    pub fn caption(&self) -> String {
        format!("{} ({:.2})", self.label, self.score)
    }
}

/// Per-tick output for the rendering collaborator. Detection overlays are
/// exposed separately through the projector's arena.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayFrame {
    /// Index of the frame this geometry was computed from.
    pub frame_index: i64,
    /// World placement of the capture-rectangle proxy.
    pub plane: PlanePlacement,
    /// Border bar thickness for the capture rectangle, pixels.
    pub frame_border_px: f32,
    /// Border strips around the full capture rectangle.
    pub frame_border: BorderStrips,
    /// Stats text top-left pivot relative to the plane center, pixels.
    pub stats_anchor: [f32; 2],
    /// Two-line latency/rate summary.
    pub stats_text: String,
}
