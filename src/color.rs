use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Product, Region};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hue_color(i as f32 / n as f32 * 360.0))
        .collect()
}

fn hue_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colour of a product series (line and bar charts).
pub fn product_color(product: Product) -> Color32 {
    let idx = Product::ALL.iter().position(|&p| p == product).unwrap_or(0);
    // Offset so products and regions don't start on the same hue.
    hue_color(240.0 + idx as f32 / Product::ALL.len() as f32 * 360.0)
}

/// Colour of a region wedge (pie chart).
pub fn region_color(region: Region) -> Color32 {
    let idx = Region::ALL.iter().position(|&r| r == region).unwrap_or(0);
    generate_palette(Region::ALL.len())[idx]
}
