//! Camera description, pose correction and world-space plane projection.
//!
//! Overview
//! - A camera session is described by [`CameraParams`]: sensor crop
//!   rectangle, pinhole intrinsics and a corrected pose in the device
//!   reference frame.
//! - Raw device [`Extrinsics`] are converted once at install time through
//!   [`pose_from_extrinsics`], a fixed order-sensitive correction (position
//!   third-axis flip; quaternion negate on two axes → invert → post-multiply
//!   180°-about-X).
//! - [`place_plane`] sizes the capture rectangle at a configured depth under
//!   the pinhole model, offsets its center relative to the principal point,
//!   composes the caller-supplied world-from-reference transform with the
//!   camera pose, and derives a uniform meters-per-pixel scale.
//! - [`StereoRig`] holds one set-once parameter block per role and is shared
//!   between the producer and consumer threads.
//!
//! Modules
//! - [`params`] – camera description types and validation.
//! - `pose` – extrinsic convention correction.
//! - `projection` – plane placement math.
//! - `rig` – session-scoped per-role registry.

pub mod params;
pub mod pose;
pub mod projection;
pub mod rig;


pub use params::{CameraParams, CameraPose, Extrinsics, Intrinsics, SensorRect};
pub use pose::pose_from_extrinsics;
pub use projection::{place_plane, PlanePlacement, MIN_PLANE_DEPTH_M};
pub use rig::StereoRig;
