mod common;

use common::synthetic::{result_for, sample_detections, STREAM_BASE};
use nalgebra::Isometry3;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stereo_overlay::camera::CameraParams;
use stereo_overlay::overlay::{LabelTable, OverlayParams, OverlayProjector};
use stereo_overlay::stats::STAT_HISTORY;
use stereo_overlay::stream::{stream_id_for_role, CameraRole, ResultRouter, RouterParams};
use stereo_overlay::{LatestSlot, StereoRig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rig_with_both_cameras() -> Arc<StereoRig> {
    let rig = Arc::new(StereoRig::new());
    rig.install(CameraRole::Left, CameraParams::default())
        .unwrap();
    rig.install(CameraRole::Right, CameraParams::default())
        .unwrap();
    rig
}

fn pipeline(params: RouterParams) -> (ResultRouter, OverlayProjector) {
    let rig = rig_with_both_cameras();
    let slot = Arc::new(LatestSlot::new());
    let router = ResultRouter::new(params, rig, Arc::clone(&slot));
    let projector = OverlayProjector::new(OverlayParams::default(), LabelTable::default(), slot);
    (router, projector)
}

#[test]
fn delivered_result_projects_through_the_resolved_camera() {
    init_logging();
    let (router, mut projector) = pipeline(RouterParams::default());

    let stream = stream_id_for_role(STREAM_BASE, CameraRole::Left);
    router.deliver(result_for(&stream, 3, 1.0));

    let frame = projector
        .tick(&Isometry3::identity())
        .expect("pending result must project");
    assert_eq!(frame.frame_index, 3);
    assert_eq!(frame.plane.size_px, [1280.0, 960.0]);
    assert!(frame.stats_text.starts_with("Latency: 50.0 ms"));

    assert_eq!(projector.detections().count(), sample_detections().len());
    let first = projector.detections().next().unwrap();
    assert_eq!(first.anchored_position, [-320.0, 240.0]);
    assert!((first.size_px[0] - 128.0).abs() < 1e-3);
    assert!((first.size_px[1] - 288.0).abs() < 1e-3);
    assert_eq!(first.caption(), "person (1.00)");
}

#[test]
fn unrecognized_tag_falls_back_to_the_configured_role() {
    init_logging();
    let (router, mut projector) = pipeline(RouterParams::default());

    // "MAIN" parses as a tag but matches no role; the default policy maps
    // it to the right camera.
    router.deliver(result_for("stereo_stream_MAIN", 0, 1.0));
    let frame = projector
        .tick(&Isometry3::identity())
        .expect("fallback role must supply a camera");
    assert_eq!(frame.frame_index, 0);
}

#[test]
fn foreign_stream_updates_stats_but_projects_nothing() {
    init_logging();
    let (router, mut projector) = pipeline(RouterParams::default());

    router.deliver(result_for("other_pipeline_left", 0, 1.0));
    assert!(projector.tick(&Isometry3::identity()).is_none());
    assert_eq!(projector.stats().len(), 1);
}

#[test]
fn score_filter_drops_detections_before_publication() {
    init_logging();
    let (router, mut projector) = pipeline(RouterParams {
        min_score: 0.9,
        ..RouterParams::default()
    });

    let stream = stream_id_for_role(STREAM_BASE, CameraRole::Left);
    router.deliver(result_for(&stream, 0, 1.0));
    projector
        .tick(&Isometry3::identity())
        .expect("result with surviving detections must project");

    let labels: Vec<&str> = projector.detections().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["person"], "0.85-score box must be filtered");
}

#[test]
fn producer_and_consumer_converge_on_the_final_frame() {
    init_logging();
    let (router, mut projector) = pipeline(RouterParams::default());

    const FRAMES: i64 = 30;
    let producer = thread::spawn(move || {
        for index in 0..FRAMES {
            let role = if index % 2 == 0 {
                CameraRole::Left
            } else {
                CameraRole::Right
            };
            let stream = stream_id_for_role(STREAM_BASE, role);
            router.deliver(result_for(&stream, index, index as f64 * 0.033));
            thread::sleep(Duration::from_millis(2));
        }
    });

    // The final publish stays pending until taken, so reaching the last
    // index is guaranteed even when intermediate frames are overwritten.
    let world = Isometry3::identity();
    let mut last_projected = -1i64;
    while last_projected != FRAMES - 1 {
        if let Some(frame) = projector.tick(&world) {
            assert!(
                frame.frame_index > last_projected,
                "latest-wins handoff must never go backwards: {} after {}",
                frame.frame_index,
                last_projected
            );
            last_projected = frame.frame_index;
        }
    }
    producer.join().expect("producer thread panicked");

    assert!(projector.stats().len() <= STAT_HISTORY);
    assert_eq!(projector.frame().unwrap().frame_index, FRAMES - 1);
}
