use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;

const HEADERS: [&str; 7] = ["#", "Product A", "Product B", "Product C", "Temp", "Region", "Total"];
const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Raw row table (floating window)
// ---------------------------------------------------------------------------

/// Show the current batch in a striped table inside a closable window.
pub fn rows_window(ctx: &egui::Context, open: &mut bool, dataset: &Dataset) {
    egui::Window::new("Sample rows")
        .open(open)
        .default_width(520.0)
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            rows_table(ui, dataset);
        });
}

fn rows_table(ui: &mut Ui, dataset: &Dataset) {
    let rows = dataset.rows();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(32.0))
        .columns(Column::remainder().at_least(60.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = &rows[row.index()];
                let cells = [
                    r.index.to_string(),
                    r.product_a.to_string(),
                    r.product_b.to_string(),
                    r.product_c.to_string(),
                    format!("{:.1}", r.temperature),
                    r.region.to_string(),
                    r.total.to_string(),
                ];
                for text in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(text.as_str());
                    });
                }
            });
        });
}
