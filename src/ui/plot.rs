use eframe::egui::{self, Color32, CursorIcon, Pos2, Rect, Ui, Vec2};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotBounds, PlotPoints, VLine};

use crate::color::{X_MARKER_COLOR, Y_MARKER_COLOR};
use crate::data::model::Axis;
use crate::slicer::{ChartInstance, InstanceId, Margin, PointerEvent, Viewport};

// ---------------------------------------------------------------------------
// Slicer plot (one per chart)
// ---------------------------------------------------------------------------

/// Render one chart and route pointer drags on its markers back into the engine.
///
/// egui_plot's own pan / zoom is disabled: the bounds always equal the
/// instance's domains, so the plot frame is the engine's coordinate space.
pub fn slicer_plot(ui: &mut Ui, id: InstanceId, instance: &mut ChartInstance, color: Color32) {
    let x_domain = instance.domain(Axis::X);
    let y_domain = instance.domain(Axis::Y);
    let markers = *instance.markers();
    let columns = instance.columns();
    let dataset = instance.dataset();
    let x_label = dataset.label(columns.x).unwrap_or("X").to_string();
    let y_label = dataset.label(columns.y).unwrap_or("Y").to_string();
    let points: PlotPoints = instance.series().into_iter().collect();
    let size = instance.config().viewport;

    let plot_response = Plot::new(("slicer_plot", id))
        .width(size.width as f32)
        .height(size.height as f32)
        .x_axis_label(x_label)
        .y_axis_label(y_label.clone())
        .set_margin_fraction(Vec2::ZERO)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            if !x_domain.is_degenerate() && !y_domain.is_degenerate() {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [x_domain.min, y_domain.min],
                    [x_domain.max, y_domain.max],
                ));
            }

            plot_ui.line(Line::new(points).name(&y_label).color(color).width(1.5));

            for (i, x) in markers.pair(Axis::X).into_iter().enumerate() {
                plot_ui.vline(
                    VLine::new(x)
                        .name(format!("X{}", i + 1))
                        .color(X_MARKER_COLOR.gamma_multiply(0.6))
                        .width(2.0)
                        .style(LineStyle::dashed_loose()),
                );
            }
            for (i, y) in markers.pair(Axis::Y).into_iter().enumerate() {
                plot_ui.hline(
                    HLine::new(y)
                        .name(format!("Y{}", i + 1))
                        .color(Y_MARKER_COLOR.gamma_multiply(0.6))
                        .width(2.0)
                        .style(LineStyle::dashed_loose()),
                );
            }
        });

    let response = plot_response.response;
    let rect = response.rect;
    instance.set_viewport(
        Viewport {
            width: f64::from(rect.width()),
            height: f64::from(rect.height()),
        },
        margin_between(rect, *plot_response.transform.frame()),
    );

    let local = |pos: Pos2| (f64::from(pos.x - rect.left()), f64::from(pos.y - rect.top()));

    // Cursor hint when hovering a grabbable line.
    if let Some(pos) = response.hover_pos() {
        let (px, py) = local(pos);
        if let Some(marker) = instance.marker_at(px, py) {
            let icon = match marker.axis {
                Axis::X => CursorIcon::ResizeColumn,
                Axis::Y => CursorIcon::ResizeRow,
            };
            ui.ctx().set_cursor_icon(icon);
        }
    }

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (px, py) = local(pos);
            if let Some(marker) = instance.marker_at(px, py) {
                instance.handle_pointer(PointerEvent::Down(marker));
            }
        }
    }

    if instance.drag().is_dragging() {
        let pointer = ui.ctx().pointer_latest_pos();
        if response.drag_stopped() {
            instance.handle_pointer(PointerEvent::Up);
        } else if let Some(pos) = pointer {
            if rect.contains(pos) {
                let (px, py) = local(pos);
                instance.handle_pointer(PointerEvent::Move { x: px, y: py });
            } else {
                instance.handle_pointer(PointerEvent::Leave);
            }
        }
        ui.ctx().request_repaint();
    }
}

/// Insets of the plotting frame inside the widget rect.
fn margin_between(outer: Rect, frame: Rect) -> Margin {
    Margin {
        top: f64::from(frame.top() - outer.top()),
        right: f64::from(outer.right() - frame.right()),
        bottom: f64::from(outer.bottom() - frame.bottom()),
        left: f64::from(frame.left() - outer.left()),
    }
}

/// Placeholder shown before a file is loaded.
pub fn empty_hint(ui: &mut Ui) {
    ui.label(egui::RichText::new("Open a CSV file to plot it  (Open CSV…)").weak());
}
