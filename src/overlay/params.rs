//! Parameter types configuring overlay projection.

use serde::{Deserialize, Serialize};

/// Knobs for the overlay projector. Defaults suit an arm's-length projection
/// surface with centimeter-scale border lines.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayParams {
    /// Assumed distance from camera to the flat projection surface, meters.
    pub plane_depth_m: f32,
    /// Border line thickness around the full capture rectangle, meters.
    pub frame_line_thickness_m: f32,
    /// Border line thickness around each detection box, meters.
    pub box_line_thickness_m: f32,
    /// Inset of the stats text anchor from the plane's top-left corner,
    /// pixels.
    pub stats_padding_px: f32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            plane_depth_m: 0.5,
            frame_line_thickness_m: 0.01,
            box_line_thickness_m: 0.01,
            stats_padding_px: 30.0,
        }
    }
}
