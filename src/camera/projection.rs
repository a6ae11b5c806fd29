//! Pinhole plane placement: sizes and positions the capture rectangle in
//! world space at a chosen depth.

use super::params::CameraParams;
use log::error;
use nalgebra::{Isometry3, Point3, UnitQuaternion};
use serde::Serialize;

/// Lower clamp for the projection depth, meters. Avoids division
/// degeneracies for configured depths at or below zero.
pub const MIN_PLANE_DEPTH_M: f32 = 0.001;

/// World-space placement of the capture-rectangle proxy at the configured
/// depth, plus the scale linking overlay pixels to meters.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanePlacement {
    /// World position of the rectangle center.
    pub position: Point3<f32>,
    /// World orientation; the plane faces along the camera forward axis.
    pub rotation: UnitQuaternion<f32>,
    /// Rectangle size in sensor pixels, `(width, height)`.
    pub size_px: [f32; 2],
    /// Physical rectangle size at the projection depth, meters.
    pub size_m: [f32; 2],
    /// Uniform scale, mean of the per-axis scales. Anisotropy from `fx` vs
    /// `fy` is averaged away, near-square pixels assumed.
    pub meters_per_pixel: f32,
}

/// Places the capture rectangle of `camera` in world space at
/// `plane_depth_m` along the camera forward axis.
///
/// `world_from_reference` is supplied by the rendering collaborator and
/// composed with the camera's reference-frame pose. Returns `None` on
/// degenerate intrinsics (zero or non-finite focal length); the condition is
/// reported and the frame is skipped, never retried.
pub fn place_plane(
    camera: &CameraParams,
    plane_depth_m: f32,
    world_from_reference: &Isometry3<f32>,
) -> Option<PlanePlacement> {
    let k = &camera.intrinsics;
    if camera.validate().is_err() {
        error!(
            "place_plane degenerate camera (fx={} fy={} rect={}x{}), skipping frame",
            k.fx, k.fy, camera.rect.width, camera.rect.height
        );
        return None;
    }

    let depth = plane_depth_m.max(MIN_PLANE_DEPTH_M);
    let width_m = depth * camera.rect.width / k.fx;
    let height_m = depth * camera.rect.height / k.fy;

    // Rectangle center relative to the principal point, in camera-local
    // meters at the projection depth.
    let (u_c, v_c) = camera.rect.center();
    let x_c = (u_c - k.cx) / k.fx * depth;
    let y_c = (v_c - k.cy) / k.fy * depth;
    let center_local = Point3::new(x_c, y_c, depth);

    let world_from_camera = world_from_reference * camera.reference_from_camera();
    let position = world_from_camera.transform_point(&center_local);
    let rotation = world_from_camera.rotation;

    let meters_per_pixel =
        (width_m / camera.rect.width + height_m / camera.rect.height) * 0.5;

    Some(PlanePlacement {
        position,
        rotation,
        size_px: [camera.rect.width, camera.rect.height],
        size_m: [width_m, height_m],
        meters_per_pixel,
    })
}
