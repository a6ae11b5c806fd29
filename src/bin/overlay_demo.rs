use nalgebra::Isometry3;
use serde::Serialize;
use stereo_overlay::camera::{pose_from_extrinsics, CameraParams, Extrinsics};
use stereo_overlay::config::{load_config, DemoConfig};
use stereo_overlay::overlay::{DetectionOverlay, LabelTable, OverlayFrame, OverlayProjector};
use stereo_overlay::stream::{stream_id_for_role, CameraRole, ResultRouter};
use stereo_overlay::types::{Detection, FrameResult, NormalizedBox};
use stereo_overlay::{LatestSlot, StereoRig};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    let rig = Arc::new(StereoRig::new());
    rig.install(CameraRole::Left, left_camera())?;
    rig.install(CameraRole::Right, right_camera())?;

    let slot = Arc::new(LatestSlot::new());
    let router = ResultRouter::new(config.router.clone(), Arc::clone(&rig), Arc::clone(&slot));
    let mut projector = OverlayProjector::new(
        config.overlay,
        LabelTable::default(),
        Arc::clone(&slot),
    );

    let base = config.router.base_stream_id.clone();
    let frames = config.frames;
    let interval_s = config.interval_ms as f64 / 1000.0;
    let interval = Duration::from_millis(config.interval_ms);
    let producer = thread::spawn(move || {
        for index in 0..frames {
            router.deliver(synthetic_result(&base, index, interval_s));
            thread::sleep(interval);
        }
    });

    // Consumer loop at its own cadence; frames published between ticks are
    // overwritten, not queued.
    let world = Isometry3::identity();
    let mut projected = 0u32;
    while !producer.is_finished() {
        if projector.tick(&world).is_some() {
            projected += 1;
        }
        thread::sleep(Duration::from_millis(5));
    }
    // Drain the result published after the last tick, if any.
    if projector.tick(&world).is_some() {
        projected += 1;
    }
    producer
        .join()
        .map_err(|_| "Producer thread panicked".to_string())?;

    print_text_summary(&projector, frames, projected);

    if let Some(path) = &config.json_out {
        let frame = projector
            .frame()
            .ok_or_else(|| "No frame was projected, nothing to write".to_string())?;
        let report = TickReport {
            frame,
            detections: projector.detections().collect(),
        };
        write_json_file(path, &report)?;
        println!("Wrote overlay JSON to {}", path.display());
    }

    Ok(())
}

/// Reference camera at the rig origin.
fn left_camera() -> CameraParams {
    CameraParams::default()
}

/// Second camera offset by a nominal stereo baseline.
fn right_camera() -> CameraParams {
    CameraParams {
        pose: pose_from_extrinsics(&Extrinsics {
            tx: 0.065,
            ..Extrinsics::identity()
        }),
        ..CameraParams::default()
    }
}

/// One synthetic detection result, alternating between the two streams.
/// Capture timestamps advance on an ideal clock so the reported rate matches
/// the configured interval.
fn synthetic_result(base: &str, index: u32, interval_s: f64) -> FrameResult {
    let role = if index % 2 == 0 {
        CameraRole::Left
    } else {
        CameraRole::Right
    };
    let timestamp_sec = f64::from(index) * interval_s;
    FrameResult {
        stream_id: stream_id_for_role(base, role),
        frame_index: i64::from(index),
        timestamp_sec,
        received_sec: timestamp_sec + 0.015,
        detections: vec![
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
        ],
    }
}

fn print_text_summary(projector: &OverlayProjector, produced: u32, projected: u32) {
    println!("Produced {produced} results, projected {projected} (latest wins, rest overwritten)");
    let Some(frame) = projector.frame() else {
        println!("No frame was projected");
        return;
    };
    println!(
        "Final frame #{}: plane {:.3}x{:.3} m, {:.6} m/px",
        frame.frame_index,
        frame.plane.size_m[0],
        frame.plane.size_m[1],
        frame.plane.meters_per_pixel
    );
    println!("{}", frame.stats_text);
    for overlay in projector.detections() {
        println!(
            "  {} at ({:.1}, {:.1}) px, {:.1}x{:.1} px",
            overlay.caption(),
            overlay.anchored_position[0],
            overlay.anchored_position[1],
            overlay.size_px[0],
            overlay.size_px[1]
        );
    }
}

/// Final overlay frame plus its detection overlays, for the JSON dump.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TickReport<'a> {
    frame: &'a OverlayFrame,
    detections: Vec<&'a DetectionOverlay>,
}

fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
