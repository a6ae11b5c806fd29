//! Camera description types used by the projection model.
//!
//! A camera session is described by a sensor crop rectangle, pinhole
//! intrinsics and a corrected pose in the device reference frame. Raw device
//! extrinsics are a separate type; see [`pose_from_extrinsics`] for the
//! convention correction applied at install time.
//!
//! [`pose_from_extrinsics`]: crate::camera::pose_from_extrinsics

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Pixel rectangle describing the sensor crop used for a stream. Fixed per
/// camera session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SensorRect {
    /// Pixel-space center of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }
}

impl Default for SensorRect {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 1280.0,
            height: 960.0,
        }
    }
}

/// Pinhole intrinsics in pixels. Fixed per camera session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
    pub skew: f32,
}

impl Default for Intrinsics {
    fn default() -> Self {
        Self {
            fx: 800.0,
            fy: 800.0,
            cx: 640.0,
            cy: 480.0,
            skew: 0.0,
        }
    }
}

/// Raw camera pose relative to the device reference frame, in the
/// device-native convention. Must be corrected before use; see
/// [`pose_from_extrinsics`](crate::camera::pose_from_extrinsics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extrinsics {
    pub tx: f32,
    pub ty: f32,
    pub tz: f32,
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    /// Identity extrinsics are `qw = 1` with every other field zero.
    pub qw: f32,
}

impl Extrinsics {
    pub fn identity() -> Self {
        Self {
            qw: 1.0,
            ..Self::default()
        }
    }
}

/// Corrected camera pose: reference-from-camera rotation and camera position
/// in the reference frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub rotation: UnitQuaternion<f32>,
    pub position: Vector3<f32>,
}

impl CameraPose {
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            position: Vector3::zeros(),
        }
    }

    /// Reference-from-camera transform as an isometry.
    pub fn to_isometry(&self) -> Isometry3<f32> {
        Isometry3::from_parts(Translation3::from(self.position), self.rotation)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composed, corrected camera description used for projection. One instance
/// per role, installed once per session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    pub rect: SensorRect,
    pub intrinsics: Intrinsics,
    pub pose: CameraPose,
}

impl CameraParams {
    /// Checks that the description can drive projection: finite, non-zero
    /// focal lengths and a positive rectangle.
    pub fn validate(&self) -> Result<(), String> {
        let k = &self.intrinsics;
        if k.fx == 0.0 || k.fy == 0.0 || !k.fx.is_finite() || !k.fy.is_finite() {
            return Err(format!(
                "invalid camera intrinsics: fx={} fy={}",
                k.fx, k.fy
            ));
        }
        if self.rect.width <= 0.0 || self.rect.height <= 0.0 {
            return Err(format!(
                "invalid sensor rect: {}x{}",
                self.rect.width, self.rect.height
            ));
        }
        Ok(())
    }

    pub fn reference_from_camera(&self) -> Isometry3<f32> {
        self.pose.to_isometry()
    }
}
