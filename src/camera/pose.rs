//! Device extrinsics to render-convention pose correction.

use super::params::{CameraPose, Extrinsics};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

/// Converts raw device extrinsics into the reference-frame pose used by the
/// rendering collaborator.
///
/// The device convention differs from the render convention in handedness
/// and camera orientation; the correction is a fixed, order-sensitive
/// sequence:
///
/// 1. position: third axis sign-flipped, `(tx, ty, -tz)`;
/// 2. rotation: negate the first two quaternion axes, invert, then
///    post-multiply by a 180° rotation about X.
///
/// Quaternion composition is non-commutative; reordering these steps
/// produces a different (wrong) orientation.
pub fn pose_from_extrinsics(extrinsics: &Extrinsics) -> CameraPose {
    let position = Vector3::new(extrinsics.tx, extrinsics.ty, -extrinsics.tz);

    let reference_to_camera = UnitQuaternion::from_quaternion(Quaternion::new(
        extrinsics.qw,
        -extrinsics.qx,
        -extrinsics.qy,
        extrinsics.qz,
    ));
    let camera_to_reference = reference_to_camera.inverse();
    let flip_x = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f32::consts::PI);
    let rotation = camera_to_reference * flip_x;

    CameraPose { rotation, position }
}
