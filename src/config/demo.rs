use crate::overlay::OverlayParams;
use crate::stream::RouterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the overlay demo: synthetic result cadence plus router
/// and projector parameters. Every field has a default, so an empty JSON
/// object is a valid config.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of synthetic result frames to produce.
    pub frames: u32,
    /// Producer delay between consecutive results, milliseconds.
    pub interval_ms: u64,
    pub router: RouterParams,
    pub overlay: OverlayParams,
    /// Optional path for a JSON dump of the final overlay frame.
    pub json_out: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            interval_ms: 33,
            router: RouterParams::default(),
            overlay: OverlayParams::default(),
            json_out: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_resolves_to_defaults() {
        let config: DemoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.frames, 120);
        assert_eq!(config.interval_ms, 33);
        assert_eq!(config.router.base_stream_id, "stereo_stream");
        assert!(config.json_out.is_none());
    }

    #[test]
    fn nested_sections_override_selectively() {
        let config: DemoConfig = serde_json::from_str(
            r#"{
                "frames": 10,
                "router": { "min_score": 0.25 },
                "overlay": { "plane_depth_m": 1.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.frames, 10);
        assert!((config.router.min_score - 0.25).abs() < 1e-6);
        assert!((config.overlay.plane_depth_m - 1.5).abs() < 1e-6);
        // Untouched fields keep their defaults.
        assert_eq!(config.interval_ms, 33);
    }
}
