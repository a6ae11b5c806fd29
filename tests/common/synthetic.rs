use stereo_overlay::types::{Detection, FrameResult, NormalizedBox};

pub const STREAM_BASE: &str = "stereo_stream";

/// Two-box payload on the default 1280x960 camera: one narrow box in the
/// upper-left quadrant, one square box right of center.
pub fn sample_detections() -> Vec<Detection> {
    vec![
        Detection {
            bbox: NormalizedBox {
                x: 0.25,
                y: 0.25,
                w: 0.1,
                h: 0.3,
            },
            class_id: 1,
            score: 1.0,
        },
        Detection {
            bbox: NormalizedBox {
                x: 0.65,
                y: 0.5,
                w: 0.2,
                h: 0.2,
            },
            class_id: 2,
            score: 0.85,
        },
    ]
}

/// A result carrying [`sample_detections`] with a fixed 50 ms transport
/// latency.
pub fn result_for(stream_id: &str, frame_index: i64, timestamp_sec: f64) -> FrameResult {
    FrameResult {
        stream_id: stream_id.to_string(),
        frame_index,
        timestamp_sec,
        received_sec: timestamp_sec + 0.050,
        detections: sample_detections(),
    }
}
