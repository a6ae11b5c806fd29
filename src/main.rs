use nalgebra::Isometry3;
use stereo_overlay::camera::CameraParams;
use stereo_overlay::overlay::{LabelTable, OverlayParams, OverlayProjector};
use stereo_overlay::types::{Detection, FrameResult, NormalizedBox};
use stereo_overlay::LatestSlot;
use std::sync::Arc;

fn main() {
    // Demo stub: projects one synthetic result through the default camera
    let result = FrameResult {
        stream_id: "stereo_stream_left".to_string(),
        frame_index: 0,
        timestamp_sec: 0.0,
        received_sec: 0.016,
        detections: vec![Detection {
            bbox: NormalizedBox {
                x: 0.25,
                y: 0.25,
                w: 0.1,
                h: 0.3,
            },
            class_id: 1,
            score: 0.9,
        }],
    };

    let mut projector = OverlayProjector::new(
        OverlayParams::default(),
        LabelTable::default(),
        Arc::new(LatestSlot::new()),
    );
    let camera = CameraParams::default();
    let world = Isometry3::identity();
    if let Some(frame) = projector.project(&result, &camera, &world) {
        println!(
            "plane {:.3}x{:.3} m at depth {:.3} m, {:.6} m/px",
            frame.plane.size_m[0],
            frame.plane.size_m[1],
            frame.plane.position.z,
            frame.plane.meters_per_pixel
        );
    }
    for overlay in projector.detections() {
        println!(
            "{} at ({:.1}, {:.1}) px, {:.1}x{:.1} px",
            overlay.caption(),
            overlay.anchored_position[0],
            overlay.anchored_position[1],
            overlay.size_px[0],
            overlay.size_px[1]
        );
    }
}
