//! Producer-side ingest: score filtering, role resolution and slot publish.

use super::role::{resolve_role, CameraRole, RoleTag};
use crate::camera::{CameraParams, StereoRig};
use crate::handoff::LatestSlot;
use crate::types::FrameResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session configuration for the ingest path.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterParams {
    /// Base stream id results are matched against.
    pub base_stream_id: String,
    /// Detections scoring strictly below this are dropped at ingest.
    pub min_score: f32,
    /// Role assumed for stream ids whose tag parses as unrecognized.
    /// `None` leaves such results without camera parameters.
    pub fallback_role: Option<CameraRole>,
}

impl Default for RouterParams {
    fn default() -> Self {
        Self {
            base_stream_id: "stereo_stream".to_string(),
            min_score: 0.0,
            fallback_role: Some(CameraRole::Right),
        }
    }
}

/// A frame result paired with the camera that produced it, if resolved.
#[derive(Clone, Debug)]
pub struct RoutedResult {
    pub result: FrameResult,
    pub camera: Option<CameraParams>,
}

/// Routes incoming results to the handoff slot, attaching the originating
/// camera's parameters.
///
/// Lives on the producer side: `deliver` is intended to be called from the
/// result callback thread. Every result is published, including those
/// without resolvable camera parameters, so downstream statistics keep
/// flowing; the consumer decides whether geometry can be projected.
pub struct ResultRouter {
    params: RouterParams,
    rig: Arc<StereoRig>,
    slot: Arc<LatestSlot<RoutedResult>>,
}

impl ResultRouter {
    pub fn new(
        params: RouterParams,
        rig: Arc<StereoRig>,
        slot: Arc<LatestSlot<RoutedResult>>,
    ) -> Self {
        Self { params, rig, slot }
    }

    /// Filters, resolves and publishes one result. Never blocks; an
    /// unconsumed previous result is overwritten.
    pub fn deliver(&self, mut result: FrameResult) {
        let before = result.detections.len();
        // Strictly-below drop rule; NaN scores are kept.
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        result
            .detections
            .retain(|d| !(d.score < self.params.min_score));
        if result.detections.len() < before {
            debug!(
                "ResultRouter::deliver dropped {} detections below score {}",
                before - result.detections.len(),
                self.params.min_score
            );
        }

        let camera = self
            .resolve(&result.stream_id)
            .and_then(|role| self.rig.params(role).copied());
        self.slot.publish(RoutedResult { result, camera });
    }

    fn resolve(&self, stream_id: &str) -> Option<CameraRole> {
        match resolve_role(stream_id, &self.params.base_stream_id) {
            None => {
                debug!(
                    "ResultRouter::deliver stream id {stream_id:?} does not match base {:?}",
                    self.params.base_stream_id
                );
                None
            }
            Some(RoleTag::Unrecognized) => {
                warn!(
                    "ResultRouter::deliver unrecognized role tag in {stream_id:?}, fallback={:?}",
                    self.params.fallback_role
                );
                self.params.fallback_role
            }
            Some(tag) => tag.role(),
        }
    }
}
