use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{product_color, region_color};
use crate::config::ChartType;
use crate::data::model::{Dataset, Product, Region, RegionSummary};
use crate::state::AppState;

/// The line chart only shows the head of the batch.
pub const LINE_CHART_MAX_ROWS: usize = 30;

// ---------------------------------------------------------------------------
// Chart dispatch (central panel)
// ---------------------------------------------------------------------------

/// Render the selected chart in the central panel.
pub fn dashboard_chart(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("{} Visualization", state.chart_type));
    ui.separator();

    let dataset = &state.dataset;
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data generated");
        });
        return;
    }

    match state.chart_type {
        ChartType::Line => line_chart(ui, dataset),
        ChartType::Bar => bar_chart(ui, dataset),
        ChartType::Pie => pie_chart(ui, dataset),
        ChartType::Scatter => scatter_chart(ui, dataset),
    }
}

// ---------------------------------------------------------------------------
// Line: per-product values over the first rows
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, dataset: &Dataset) {
    let head = &dataset.rows()[..dataset.len().min(LINE_CHART_MAX_ROWS)];

    Plot::new("line_chart")
        .legend(Legend::default())
        .x_axis_label("Index")
        .y_axis_label("Units")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for product in Product::ALL {
                let points: PlotPoints = head
                    .iter()
                    .map(|r| [r.index as f64, r.product(product) as f64])
                    .collect();

                let line = Line::new(points)
                    .name(product.name())
                    .color(product_color(product))
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Bar: mean per product
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, dataset: &Dataset) {
    let bars: Vec<Bar> = dataset
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.mean)
                .name(format!("{} ({:.0})", c.product, c.mean))
                .fill(product_color(c.product))
                .width(0.6)
        })
        .collect();

    Plot::new("bar_chart")
        .legend(Legend::default())
        .y_axis_label("Mean units")
        .x_axis_formatter(|mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            Product::ALL
                .get(i as usize)
                .map(|p| p.name().to_string())
                .unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Mean sales"));
        });
}

// ---------------------------------------------------------------------------
// Pie: summed totals per region
// ---------------------------------------------------------------------------

const PIE_SEGMENTS_PER_TURN: f64 = 128.0;

/// One wedge of the pie, angles in radians measured from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub region: Region,
    pub value: i64,
    pub start: f64,
    pub end: f64,
}

/// Lay out wedges proportionally to each region's total. Regions with a
/// non-positive total have no area and are skipped.
pub fn pie_slices(regions: &[RegionSummary]) -> Vec<PieSlice> {
    let sum: i64 = regions.iter().map(|r| r.total).filter(|&t| t > 0).sum();
    if sum <= 0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    regions
        .iter()
        .filter(|r| r.total > 0)
        .map(|r| {
            let sweep = TAU * r.total as f64 / sum as f64;
            let slice = PieSlice {
                region: r.region,
                value: r.total,
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

fn polar(radius: f64, angle: f64) -> [f64; 2] {
    // Clockwise from 12 o'clock.
    [radius * angle.sin(), radius * angle.cos()]
}

fn wedge_points(slice: &PieSlice) -> PlotPoints {
    let steps = ((slice.end - slice.start) / TAU * PIE_SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for s in 0..=steps {
        let t = slice.start + (slice.end - slice.start) * s as f64 / steps as f64;
        pts.push(polar(1.0, t));
    }
    PlotPoints::new(pts)
}

fn pie_chart(ui: &mut Ui, dataset: &Dataset) {
    let slices = pie_slices(dataset.regions());
    if slices.is_empty() {
        ui.label(RichText::new("No positive region totals to chart.").color(Color32::GRAY));
        return;
    }

    Plot::new("pie_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.5)
        .include_x(1.5)
        .include_y(-1.5)
        .include_y(1.5)
        .show(ui, |plot_ui| {
            for slice in &slices {
                let color = region_color(slice.region);
                plot_ui.polygon(
                    Polygon::new(wedge_points(slice))
                        .name(slice.region.name())
                        .fill_color(color)
                        .stroke((1.0, Color32::WHITE)),
                );

                let [x, y] = polar(1.25, (slice.start + slice.end) / 2.0);
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    format!("{}: {}", slice.region, slice.value),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter: total against temperature
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, dataset: &Dataset) {
    let points: PlotPoints = dataset
        .rows()
        .iter()
        .map(|r| [r.temperature, r.total as f64])
        .collect();

    Plot::new("scatter_chart")
        .legend(Legend::default())
        .x_axis_label("Temperature")
        .y_axis_label("Sales")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("Sales vs Temp")
                    .color(product_color(Product::A))
                    .radius(4.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(region: Region, total: i64) -> RegionSummary {
        RegionSummary { region, total }
    }

    #[test]
    fn slices_cover_a_full_turn() {
        let slices = pie_slices(&[
            summary(Region::North, 100),
            summary(Region::West, 300),
        ]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[0].end - TAU / 4.0).abs() < 1e-12);
        assert_eq!(slices[1].start, slices[0].end);
        assert!((slices[1].end - TAU).abs() < 1e-12);
    }

    #[test]
    fn non_positive_totals_are_skipped() {
        let slices = pie_slices(&[
            summary(Region::North, -20),
            summary(Region::South, 0),
            summary(Region::East, 50),
        ]);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].region, Region::East);
        assert!((slices[0].end - TAU).abs() < 1e-12);
    }

    #[test]
    fn nothing_positive_means_no_pie() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[summary(Region::West, -1)]).is_empty());
    }
}
