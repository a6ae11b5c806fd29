//! Session-scoped camera registry: one set-once parameter block per role.

use super::params::CameraParams;
use crate::stream::CameraRole;
use log::debug;
use std::sync::OnceLock;

/// Stereo camera pair for one session.
///
/// Parameters are installed at most once per role and held for the session
/// lifetime; the set-once storage makes each install atomic (a role is
/// either fully described or absent, never partially populated). Lookups
/// after install are lock-free, so the registry can be shared between the
/// producer callback thread and the consumer tick.
#[derive(Debug, Default)]
pub struct StereoRig {
    left: OnceLock<CameraParams>,
    right: OnceLock<CameraParams>,
}

impl StereoRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and installs the parameters for `role`. Fails when the
    /// parameters cannot drive projection or when the role was already
    /// installed this session.
    pub fn install(&self, role: CameraRole, params: CameraParams) -> Result<(), String> {
        params
            .validate()
            .map_err(|e| format!("Failed to install {} camera: {e}", role.suffix()))?;
        self.slot(role).set(params).map_err(|_| {
            format!(
                "Failed to install {} camera: role already installed",
                role.suffix()
            )
        })
    }

    /// Parameters for `role`, or `None` before install.
    pub fn params(&self, role: CameraRole) -> Option<&CameraParams> {
        let params = self.slot(role).get();
        if params.is_none() {
            debug!("StereoRig::params {} camera not installed yet", role.suffix());
        }
        params
    }

    /// True once both roles are installed.
    pub fn is_complete(&self) -> bool {
        self.left.get().is_some() && self.right.get().is_some()
    }

    fn slot(&self, role: CameraRole) -> &OnceLock<CameraParams> {
        match role {
            CameraRole::Left => &self.left,
            CameraRole::Right => &self.right,
        }
    }
}
