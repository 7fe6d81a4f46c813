use graph_slicer::slicer::{
    AxisDomain, ChartInstance, ChartRegistry, CoordinateTransform, Margin, MarkerId,
    PointerEvent, Viewport,
};
use graph_slicer::{Axis, SlicerConfig};

const DATA: &str = "t,v\n0,3\n1,-2\n2,8\n3,1\n4,6\n5,0\n";

#[test]
fn pixel_data_round_trip_over_many_geometries() {
    let viewports = [(800.0, 400.0), (320.0, 240.0), (1920.0, 1080.0)];
    let domains = [(0.0, 100.0), (-1e-3, 1e-3), (-500.0, 12.0)];
    for &(w, h) in &viewports {
        for &(xmin, xmax) in &domains {
            for &(ymin, ymax) in &domains {
                let t = CoordinateTransform::new(
                    Viewport { width: w, height: h },
                    Margin::default(),
                    AxisDomain::new(xmin, xmax),
                    AxisDomain::new(ymin, ymax),
                );
                for i in 0..10 {
                    let px = w * i as f64 / 9.0;
                    let py = h * (9 - i) as f64 / 9.0;
                    let d = t.to_data(px, py).unwrap();
                    let p = t.to_pixel(d[0], d[1]).unwrap();
                    assert!((p[0] - px).abs() < 1e-6 * w.max(1.0));
                    assert!((p[1] - py).abs() < 1e-6 * h.max(1.0));
                }
            }
        }
    }
}

#[test]
fn dragged_markers_stay_in_domain() {
    let mut chart = ChartInstance::default();
    chart.ingest_text(DATA);
    let path = [-300.0, 10.0, 250.0, 799.0, 2000.0, -1.0, 433.3];
    for id in MarkerId::all() {
        chart.handle_pointer(PointerEvent::Down(id));
        for (i, &px) in path.iter().enumerate() {
            let py = path[path.len() - 1 - i];
            chart.handle_pointer(PointerEvent::Move { x: px, y: py });
        }
        chart.handle_pointer(PointerEvent::Up);

        let domain = chart.domain(id.axis);
        let value = chart.markers().get(id).unwrap();
        assert!(
            value >= domain.min && value <= domain.max,
            "{id:?} ended at {value}, outside {domain:?}"
        );
    }
}

#[test]
fn swapping_x_markers_changes_nothing() {
    let mut chart = ChartInstance::default();
    chart.ingest_text(DATA);
    chart.set_marker(MarkerId::new(Axis::X, 0), 0.5);
    chart.set_marker(MarkerId::new(Axis::X, 1), 3.5);
    let before = chart.measurement();

    chart.set_marker(MarkerId::new(Axis::X, 0), 3.5);
    chart.set_marker(MarkerId::new(Axis::X, 1), 0.5);
    let after = chart.measurement();

    assert_eq!(before.window_max, after.window_max);
    assert_eq!(before.window_min, after.window_min);
    assert_eq!(before.x_distance, after.x_distance);
    assert_eq!(after.window_max, 8.0);
    assert_eq!(after.window_min, -2.0);
}

#[test]
fn instances_do_not_share_state() {
    let mut registry = ChartRegistry::new(SlicerConfig::data_driven());
    let a = registry.add_instance();
    let b = registry.add_instance();
    registry.get_mut(b).unwrap().ingest_text(DATA);
    let b_before = registry.get(b).unwrap().measurement();

    let chart_a = registry.get_mut(a).unwrap();
    chart_a.ingest_text("x,y\n100,1000\n200,2000\n");
    chart_a.set_marker(MarkerId::new(Axis::X, 0), 150.0);
    chart_a.handle_pointer(PointerEvent::Down(MarkerId::new(Axis::X, 1)));
    chart_a.handle_pointer(PointerEvent::Move { x: 700.0, y: 10.0 });
    chart_a.set_domain(Axis::Y, -1.0, 1.0);

    let chart_b = registry.get(b).unwrap();
    assert_eq!(chart_b.measurement(), b_before);
    assert!(!chart_b.drag().is_dragging());
    assert_eq!(chart_b.dataset().len(), 6);
}

#[test]
fn manual_edit_can_leave_the_domain_but_drag_cannot() {
    let mut chart = ChartInstance::default();
    chart.ingest_text(DATA);
    let id = MarkerId::new(Axis::X, 1);

    chart.set_marker(id, 99.0);
    assert_eq!(chart.markers().get(id), Some(99.0));

    chart.handle_pointer(PointerEvent::Down(id));
    chart.handle_pointer(PointerEvent::Move { x: 5000.0, y: 0.0 });
    assert_eq!(chart.markers().get(id), Some(5.0));
}

#[test]
fn degenerate_domain_freezes_drags() {
    let mut chart = ChartInstance::default();
    chart.ingest_text("x,y\n7,1\n7,2\n");
    // single distinct X value: min == max
    assert_eq!(chart.domain(Axis::X), AxisDomain::new(7.0, 7.0));
    assert!(!chart.transform().is_defined());

    let id = MarkerId::new(Axis::X, 0);
    let before = chart.markers().get(id);
    chart.handle_pointer(PointerEvent::Down(id));
    assert!(!chart.handle_pointer(PointerEvent::Move { x: 300.0, y: 100.0 }));
    assert_eq!(chart.markers().get(id), before);
}
