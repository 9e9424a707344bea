use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::{ChartType, NOISE_LEVEL_RANGE, POINT_COUNT_RANGE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – generation controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Chart selector ----
            ui.strong("Chart type");
            egui::ComboBox::from_id_salt("chart_type")
                .selected_text(state.chart_type.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for chart in ChartType::ALL {
                        ui.selectable_value(&mut state.chart_type, chart, chart.label());
                    }
                });
            ui.add_space(8.0);

            // ---- Parameters ----
            // Sliders edit a copy; the state only rebuilds on an actual change.
            let mut point_count = state.params.point_count;
            ui.strong(format!("Data points: {point_count}"));
            if ui
                .add(egui::Slider::new(&mut point_count, POINT_COUNT_RANGE).show_value(false))
                .changed()
            {
                state.set_point_count(point_count);
            }

            let mut noise_level = state.params.noise_level;
            ui.strong(format!("Noise level: {noise_level}"));
            if ui
                .add(egui::Slider::new(&mut noise_level, NOISE_LEVEL_RANGE).show_value(false))
                .changed()
            {
                state.set_noise_level(noise_level);
            }
            ui.add_space(8.0);

            // ---- Actions ----
            ui.vertical_centered_justified(|ui: &mut Ui| {
                if ui.button("🎲 Generate New Data").clicked() {
                    state.regenerate();
                }
                if ui.button("🔢 Matrix Ops").clicked() {
                    state.run_matrix_ops();
                }
            });
            ui.separator();

            // ---- Summary statistics ----
            stats_cards(ui, state);
        });
}

fn stats_cards(ui: &mut Ui, state: &AppState) {
    let stats = state.dataset.stats();
    let cards = [
        ("Mean Sales", stats.mean_label()),
        ("Std Deviation", stats.std_dev_label()),
        ("Correlation", stats.correlation_label()),
        ("Data Points", stats.count.to_string()),
    ];

    egui::Grid::new("stats_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (title, value) in cards {
                ui.label(title);
                ui.label(RichText::new(value).strong().size(18.0));
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – matrix output
// ---------------------------------------------------------------------------

/// Render the matrix demo output, if the action has been run.
pub fn matrix_panel(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.matrix_report else {
        return;
    };
    ui.strong("Matrix Operations Output");
    ui.label(
        RichText::new(report.to_string())
            .monospace()
            .color(Color32::from_rgb(74, 222, 128)),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows, noise {}",
            state.dataset.len(),
            state.params.noise_level
        ));

        ui.separator();

        if ui.selectable_label(state.show_table, "Show Rows").clicked() {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export dataset")
        .set_file_name("dashboard.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}
