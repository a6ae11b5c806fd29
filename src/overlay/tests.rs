use super::*;
use crate::camera::CameraParams;
use crate::handoff::LatestSlot;
use crate::stream::RoutedResult;
use crate::types::{Detection, FrameResult, NormalizedBox};
use nalgebra::Isometry3;
use std::sync::Arc;

fn test_result(detections: Vec<Detection>) -> FrameResult {
    FrameResult {
        stream_id: "stereo_stream_left".to_string(),
        frame_index: 7,
        timestamp_sec: 1.0,
        received_sec: 1.1,
        detections,
    }
}

fn detection(x: f32, y: f32, w: f32, h: f32, class_id: i32, score: f32) -> Detection {
    Detection {
        bbox: NormalizedBox { x, y, w, h },
        class_id,
        score,
    }
}

fn projector() -> OverlayProjector {
    OverlayProjector::new(
        OverlayParams::default(),
        LabelTable::default(),
        Arc::new(LatestSlot::new()),
    )
}

#[test]
fn projected_box_lands_at_expected_pixel_offsets() {
    // Default camera: 1280x960 rect, fx = fy = 800, plane depth 0.5 m.
    let mut projector = projector();
    let result = test_result(vec![detection(0.25, 0.25, 0.1, 0.3, 1, 0.9)]);
    let frame = projector
        .project(&result, &CameraParams::default(), &Isometry3::identity())
        .cloned()
        .unwrap();

    assert_eq!(frame.frame_index, 7);
    assert_eq!(frame.plane.size_px, [1280.0, 960.0]);

    let overlay = projector.detections().next().unwrap();
    assert_eq!(overlay.anchored_position, [-320.0, 240.0]);
    assert!((overlay.size_px[0] - 128.0).abs() < 1e-3);
    assert!((overlay.size_px[1] - 288.0).abs() < 1e-3);
    assert_eq!(overlay.label, "person");
    assert_eq!(overlay.caption(), "person (0.90)");
}

#[test]
fn border_and_label_follow_line_thickness() {
    // 0.01 m lines at 0.000625 m/px resolve to 16 px.
    let mut projector = projector();
    let result = test_result(vec![detection(0.5, 0.5, 0.25, 0.25, 2, 0.5)]);
    let frame = projector
        .project(&result, &CameraParams::default(), &Isometry3::identity())
        .cloned()
        .unwrap();

    assert_eq!(frame.frame_border_px, 16.0);
    assert_eq!(frame.frame_border.top.anchored_position, [0.0, 472.0]);
    assert_eq!(frame.frame_border.top.size_px, [1280.0, 16.0]);

    let overlay = projector.detections().next().unwrap();
    assert_eq!(overlay.border_px, 16.0);
    // Label pivot sits below the bottom-left corner by two line widths.
    assert!((overlay.label_anchor[0] + 160.0).abs() < 1e-3);
    assert!((overlay.label_anchor[1] + 120.0 + 32.0).abs() < 1e-3);
}

#[test]
fn stats_block_is_anchored_inside_the_top_left_corner() {
    let mut projector = projector();
    let result = test_result(Vec::new());
    let frame = projector
        .project(&result, &CameraParams::default(), &Isometry3::identity())
        .unwrap();

    assert_eq!(frame.stats_anchor, [-610.0, 450.0]);
}

#[test]
fn empty_result_still_yields_plane_and_stats() {
    let slot = Arc::new(LatestSlot::new());
    let mut projector = OverlayProjector::new(
        OverlayParams::default(),
        LabelTable::default(),
        Arc::clone(&slot),
    );
    slot.publish(RoutedResult {
        result: test_result(Vec::new()),
        camera: Some(CameraParams::default()),
    });

    let frame = projector.tick(&Isometry3::identity()).unwrap();
    assert!(frame.stats_text.starts_with("Latency: 100.0 ms"));
    assert_eq!(projector.detections().count(), 0);
}

#[test]
fn tick_drains_the_slot_once() {
    let slot = Arc::new(LatestSlot::new());
    let mut projector = OverlayProjector::new(
        OverlayParams::default(),
        LabelTable::default(),
        Arc::clone(&slot),
    );
    slot.publish(RoutedResult {
        result: test_result(Vec::new()),
        camera: Some(CameraParams::default()),
    });

    assert!(projector.tick(&Isometry3::identity()).is_some());
    assert!(projector.tick(&Isometry3::identity()).is_none());
    // The previous geometry remains queryable between results.
    assert!(projector.frame().is_some());
}

#[test]
fn results_without_camera_feed_stats_but_skip_geometry() {
    let slot = Arc::new(LatestSlot::new());
    let mut projector = OverlayProjector::new(
        OverlayParams::default(),
        LabelTable::default(),
        Arc::clone(&slot),
    );
    slot.publish(RoutedResult {
        result: test_result(Vec::new()),
        camera: None,
    });

    assert!(projector.tick(&Isometry3::identity()).is_none());
    assert_eq!(projector.stats().len(), 1);
    assert!((projector.stats().current_latency_sec() - 0.1).abs() < 1e-9);
}

#[test]
fn degenerate_camera_preserves_previous_frame() {
    let mut projector = projector();
    let good = test_result(Vec::new());
    projector
        .project(&good, &CameraParams::default(), &Isometry3::identity())
        .unwrap();

    let mut broken = CameraParams::default();
    broken.intrinsics.fx = 0.0;
    let next = test_result(Vec::new());
    assert!(projector
        .project(&next, &broken, &Isometry3::identity())
        .is_none());
    assert_eq!(projector.frame().unwrap().frame_index, 7);
}

#[test]
fn stale_overlays_are_not_exposed_after_shrinking() {
    let mut projector = projector();
    let two = test_result(vec![
        detection(0.25, 0.25, 0.1, 0.1, 1, 0.9),
        detection(0.75, 0.75, 0.1, 0.1, 2, 0.8),
    ]);
    projector
        .project(&two, &CameraParams::default(), &Isometry3::identity())
        .unwrap();
    assert_eq!(projector.detections().count(), 2);

    let one = test_result(vec![detection(0.5, 0.5, 0.2, 0.2, 3, 0.7)]);
    projector
        .project(&one, &CameraParams::default(), &Isometry3::identity())
        .unwrap();
    let labels: Vec<&str> = projector.detections().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["car"]);
}

#[test]
fn unknown_class_ids_get_an_empty_label() {
    let mut projector = projector();
    let result = test_result(vec![detection(0.5, 0.5, 0.1, 0.1, 500, 0.4)]);
    projector
        .project(&result, &CameraParams::default(), &Isometry3::identity())
        .unwrap();

    let overlay = projector.detections().next().unwrap();
    assert_eq!(overlay.label, "");
    assert_eq!(overlay.caption(), " (0.40)");
}
