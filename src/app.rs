use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(seed: Option<u64>) -> Self {
        let state = match seed {
            Some(seed) => {
                log::info!("Using fixed seed {seed}");
                AppState::with_seed(seed)
            }
            None => AppState::default(),
        };
        Self { state }
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new(None)
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls + stats ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: matrix output ----
        if self.state.matrix_report.is_some() {
            egui::TopBottomPanel::bottom("matrix_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    panels::matrix_panel(ui, &self.state);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::dashboard_chart(ui, &self.state);
        });

        // ---- Floating row table ----
        let mut show_table = self.state.show_table;
        if show_table {
            table::rows_window(ctx, &mut show_table, &self.state.dataset);
            self.state.show_table = show_table;
        }
    }
}
