use std::time::{Duration, Instant};

use graph_slicer::state::AppState;
use graph_slicer::{Axis, SlicerConfig};

fn wait_for_loads(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.has_pending_loads() {
        state.poll_loads();
        assert!(Instant::now() < deadline, "load did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn loaded_file_replaces_dataset() {
    let path = std::env::temp_dir().join(format!("graph_slicer_load_{}.csv", std::process::id()));
    std::fs::write(&path, "time,signal\n0,0.5\n10,0.7\n").unwrap();

    let mut state = AppState::new(SlicerConfig::default());
    let id = state.registry.ids()[0];
    state.request_load(id, &path);
    assert!(state.is_loading(id));
    wait_for_loads(&mut state);

    let chart = state.registry.get(id).unwrap();
    assert_eq!(chart.dataset().len(), 2);
    assert_eq!(chart.dataset().labels(), ["time", "signal"]);
    assert_eq!(chart.domain(Axis::X).max, 10.0);
    assert!(state.status_message.is_none());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_sets_status_and_keeps_chart() {
    let mut state = AppState::default();
    let id = state.registry.ids()[0];
    state.request_load(id, std::path::Path::new("/definitely/not/here.csv"));
    wait_for_loads(&mut state);

    assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    assert!(state.registry.get(id).unwrap().dataset().is_empty());
}

#[test]
fn removing_a_chart_drops_its_pending_load() {
    let mut state = AppState::default();
    let extra = state.add_chart();
    state.request_load(extra, std::path::Path::new("/definitely/not/here.csv"));
    state.remove_chart(extra);
    assert!(!state.has_pending_loads());
    assert_eq!(state.registry.len(), 1);
}
