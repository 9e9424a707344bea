use crate::config::DashboardParams;

use super::model::{Dataset, Region, SampleRow};
use super::random::{generate_samples, pick_index, UniformSource};

/// (center, spread multiplier) for products A, B and C.
const PRODUCT_PROFILES: [(f64, f64); 3] = [(100.0, 1.0), (80.0, 0.8), (60.0, 0.6)];
const TEMPERATURE_CENTER: f64 = 20.0;
const TEMPERATURE_SPREAD: f64 = 8.0;

/// Build a fresh dataset from the current parameters.
///
/// Draw order is fixed (A, B, C, temperature, then one region per row) so a
/// seeded source always reproduces the same batch.
pub fn assemble_dataset<S>(params: &DashboardParams, src: &mut S) -> Dataset
where
    S: UniformSource + ?Sized,
{
    let n = params.point_count as usize;
    let noise = params.noise_level as f64;

    let [a, b, c] = PRODUCT_PROFILES.map(|(center, k)| generate_samples(center, noise * k, n, src));
    let temperature = generate_samples(TEMPERATURE_CENTER, TEMPERATURE_SPREAD, n, src);

    let rows = (0..n)
        .map(|i| SampleRow {
            index: i as u32 + 1,
            product_a: to_count(a[i]),
            product_b: to_count(b[i]),
            product_c: to_count(c[i]),
            temperature: (temperature[i] * 10.0).round() / 10.0,
            region: Region::ALL[pick_index(Region::ALL.len(), src)],
            total: (a[i] + b[i] + c[i]).round() as i64,
        })
        .collect();

    Dataset::from_rows(rows)
}

fn to_count(x: f64) -> u32 {
    x.round().max(0.0) as u32
}
