use eframe::egui;

use crate::color::series_color;
use crate::config::SlicerConfig;
use crate::state::AppState;
use crate::ui::panels::{self, PanelAction};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GraphSlicerApp {
    pub state: AppState,
}

impl Default for GraphSlicerApp {
    fn default() -> Self {
        Self::new(SlicerConfig::default())
    }
}

impl GraphSlicerApp {
    pub fn new(config: SlicerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for GraphSlicerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_loads();
        if self.state.has_pending_loads() {
            ctx.request_repaint();
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: stacked charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let loading: Vec<_> = self
                .state
                .registry
                .ids()
                .into_iter()
                .filter(|id| self.state.is_loading(*id))
                .collect();
            let count = self.state.registry.len();
            let mut actions = Vec::new();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (position, (id, instance)) in
                        self.state.registry.iter_mut().enumerate()
                    {
                        ui.push_id(id, |ui| {
                            egui::Frame::group(ui.style()).show(ui, |ui| {
                                let color = series_color(position, count);
                                let is_loading = loading.contains(&id);
                                if let Some(action) =
                                    panels::chart_panel(ui, id, instance, color, is_loading)
                                {
                                    actions.push((id, action));
                                }
                            });
                        });
                        ui.add_space(8.0);
                    }
                });

            for (id, action) in actions {
                match action {
                    PanelAction::OpenFile => {
                        if let Some(path) = panels::pick_csv_file() {
                            self.state.request_load(id, &path);
                        }
                    }
                    PanelAction::Remove => self.state.remove_chart(id),
                }
            }
        });
    }
}
