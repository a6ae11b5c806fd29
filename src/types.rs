use serde::{Deserialize, Serialize};

/// Detection rectangle in [0,1] image-fraction coordinates, `(x, y)` being
/// the top-left corner fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Single detected object within a frame result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: NormalizedBox,
    pub class_id: i32,
    pub score: f32,
}

/// Detection result for one captured frame. Produced once by the detection
/// producer and read-only afterwards; detection order is producer insertion
/// order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameResult {
    /// Composite stream identifier, `"{base}_{role}"` by producer convention.
    pub stream_id: String,
    pub frame_index: i64,
    /// Producer-stamped capture time, seconds.
    pub timestamp_sec: f64,
    /// Local arrival time, seconds. May lag `timestamp_sec` by the pipeline
    /// latency; clock skew can make the difference negative.
    pub received_sec: f64,
    pub detections: Vec<Detection>,
}

impl FrameResult {
    /// Arrival time minus capture time for this frame.
    pub fn latency_sec(&self) -> f64 {
        self.received_sec - self.timestamp_sec
    }
}
