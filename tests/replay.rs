use one_hand_cursor::cursor::{
    ActivationDispatcher, ElementMetrics, PointerPhase, ScreenBounds, TracingOverlay,
};
use one_hand_cursor::replay::{self, ReplayTrace, TouchRecord};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingDispatcher {
    taps: Mutex<Vec<(i32, i32)>>,
}

impl ActivationDispatcher for RecordingDispatcher {
    fn activate_at(&self, x: i32, y: i32) {
        if let Ok(mut guard) = self.taps.lock() {
            guard.push((x, y));
        }
    }
}

fn touch(at_ms: u64, phase: PointerPhase, x: i32, y: i32) -> TouchRecord {
    TouchRecord { at_ms, phase, x, y }
}

#[test]
fn trace_loads_with_default_metrics() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.json");
    std::fs::write(
        &path,
        r#"{
            "screen": { "width": 1080, "height": 2400 },
            "touches": [
                { "at_ms": 0, "phase": "down", "x": 50, "y": 2300 },
                { "at_ms": 16, "phase": "move", "x": 100, "y": 2350 },
                { "at_ms": 32, "phase": "up", "x": 100, "y": 2350 }
            ]
        }"#,
    )
    .unwrap();

    let trace = ReplayTrace::load(&path).unwrap();
    assert_eq!(trace.screen, ScreenBounds::new(1080, 2400));
    assert_eq!(trace.metrics, ElementMetrics::default());
    assert_eq!(trace.touches.len(), 3);
    assert_eq!(trace.touches[1].phase, PointerPhase::Move);
}

#[test]
fn out_of_order_trace_is_rejected() {
    let trace = ReplayTrace {
        screen: ScreenBounds::new(1080, 2400),
        metrics: ElementMetrics::default(),
        touches: vec![
            touch(20, PointerPhase::Down, 50, 2300),
            touch(10, PointerPhase::Up, 50, 2300),
        ],
    };
    assert!(trace.validate().is_err());
}

#[test]
fn missing_trace_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ReplayTrace::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn replay_drag_then_tap_dispatches_once() {
    let trace = ReplayTrace {
        screen: ScreenBounds::new(1080, 2400),
        metrics: ElementMetrics::default(),
        touches: vec![
            touch(0, PointerPhase::Down, 50, 2300),
            touch(5, PointerPhase::Move, 100, 2350),
            touch(10, PointerPhase::Up, 100, 2350),
            touch(20, PointerPhase::Down, 100, 2350),
            touch(25, PointerPhase::Up, 100, 2350),
        ],
    };
    let dispatcher = Arc::new(RecordingDispatcher::default());

    replay::run(
        &trace,
        Box::new(TracingOverlay::default()),
        dispatcher.clone(),
        Duration::from_millis(20),
    )
    .unwrap();

    assert_eq!(*dispatcher.taps.lock().unwrap(), vec![(270, 2295)]);
}
