use std::path::PathBuf;

use eframe::egui::{self, Color32, DragValue, RichText, Slider, SliderClamping, Ui};
use egui_extras::{Column, TableBuilder};

use super::plot;
use crate::color::{X_MARKER_COLOR, Y_MARKER_COLOR};
use crate::data::model::Axis;
use crate::slicer::{ChartInstance, InstanceId, MarkerId, Measurement};
use crate::state::AppState;

/// What a chart panel asks the app to do after it has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    OpenFile,
    Remove,
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Charts", |ui: &mut Ui| {
            if ui.button("Add chart").clicked() {
                state.add_chart();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} chart(s)", state.registry.len()));

        if state.has_pending_loads() {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// One chart
// ---------------------------------------------------------------------------

/// Render the controls, plot and readouts of a single chart.
pub fn chart_panel(
    ui: &mut Ui,
    id: InstanceId,
    instance: &mut ChartInstance,
    color: Color32,
    loading: bool,
) -> Option<PanelAction> {
    let mut action = None;

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("Chart {id}"));
        if ui.button("Open CSV…").clicked() {
            action = Some(PanelAction::OpenFile);
        }
        if loading {
            ui.spinner();
        }
        let ds = instance.dataset();
        if !ds.is_empty() {
            ui.label(format!("{} rows × {} columns", ds.len(), ds.arity()));
        }
        if ui.button("Remove").clicked() {
            action = Some(PanelAction::Remove);
        }
    });

    column_selectors(ui, id, instance);
    domain_fields(ui, instance);

    if instance.dataset().is_empty() {
        plot::empty_hint(ui);
    }
    plot::slicer_plot(ui, id, instance, color);

    x_sliders(ui, instance);

    ui.horizontal(|ui: &mut Ui| {
        marker_fields(ui, instance, Axis::X, 0.1);
        marker_fields(ui, instance, Axis::Y, 0.001);
        ui.push_id(("measurements", id), |ui: &mut Ui| {
            measurement_table(ui, &instance.measurement());
        });
    });

    action
}

fn column_selectors(ui: &mut Ui, id: InstanceId, instance: &mut ChartInstance) {
    let labels = instance.dataset().labels().to_vec();
    if labels.is_empty() {
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        for axis in Axis::ALL {
            ui.label(format!("{axis} column:"));
            let current = instance.columns().get(axis);
            let selected_text = labels.get(current).cloned().unwrap_or_default();
            egui::ComboBox::from_id_salt(("column", id, axis))
                .selected_text(selected_text)
                .show_ui(ui, |ui: &mut Ui| {
                    for (index, label) in labels.iter().enumerate() {
                        if ui.selectable_label(current == index, label).clicked() {
                            if let Err(e) = instance.select_column(axis, index) {
                                log::warn!("{e}");
                            }
                        }
                    }
                });
        }
    });
}

fn domain_fields(ui: &mut Ui, instance: &mut ChartInstance) {
    ui.horizontal(|ui: &mut Ui| {
        for (axis, speed) in [(Axis::X, 1.0), (Axis::Y, 0.01)] {
            let mut domain = instance.domain(axis);
            ui.label(format!("{axis}-Axis Min:"));
            let min_changed = ui.add(DragValue::new(&mut domain.min).speed(speed)).changed();
            ui.label(format!("{axis}-Axis Max:"));
            let max_changed = ui.add(DragValue::new(&mut domain.max).speed(speed)).changed();
            if min_changed || max_changed {
                instance.set_domain(axis, domain.min, domain.max);
            }
        }
    });
}

fn x_sliders(ui: &mut Ui, instance: &mut ChartInstance) {
    let domain = instance.domain(Axis::X);
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("X-Axis Slicer");
        for index in 0..2 {
            let id = MarkerId::new(Axis::X, index);
            let Some(mut value) = instance.markers().get(id) else {
                continue;
            };
            // Never clamp or snap: the slider must not rewrite a marker it only displays.
            let slider = Slider::new(&mut value, domain.min..=domain.max)
                .clamping(SliderClamping::Never)
                .show_value(false);
            let response = ui.add(slider);
            if response.changed() && (response.dragged() || response.has_focus()) {
                instance.set_marker(id, value);
            }
        }
    });
}

fn marker_fields(ui: &mut Ui, instance: &mut ChartInstance, axis: Axis, speed: f64) {
    let color = match axis {
        Axis::X => X_MARKER_COLOR,
        Axis::Y => Y_MARKER_COLOR,
    };
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(format!("{axis}-Range")).strong().color(color));
            for index in 0..2 {
                let id = MarkerId::new(axis, index);
                let Some(mut value) = instance.markers().get(id) else {
                    continue;
                };
                if ui.add(DragValue::new(&mut value).speed(speed)).changed() {
                    instance.set_marker(id, value);
                }
            }
        });
    });
}

fn measurement_table(ui: &mut Ui, m: &Measurement) {
    let rows = [
        ("X-Axis Distance", format!("{:.2}", m.x_distance)),
        ("Y-Axis Distance", format!("{:.3}", m.y_distance)),
        ("Y-Axis Max", format!("{:.3}", m.window_max)),
        ("Y-Axis Min", format!("{:.3}", m.window_min)),
        ("Rows in window", m.window_len.to_string()),
    ];

    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong("Measurements");
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(80.0))
                .body(|mut body| {
                    for (name, value) in rows {
                        body.row(18.0, |mut row| {
                            row.col(|ui: &mut Ui| {
                                ui.label(name);
                            });
                            row.col(|ui: &mut Ui| {
                                ui.monospace(value);
                            });
                        });
                    }
                });
        });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask the user for a CSV file.
pub fn pick_csv_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open CSV data")
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file()
}
