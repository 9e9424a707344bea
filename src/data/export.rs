use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::model::{CategorySummary, Dataset, RegionSummary, SampleRow};
use super::stats::SummaryStats;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Save the current dataset to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – one record per sample row
/// * `.json` – `{ "rows": [...], "stats": {...}, "categories": [...], "regions": [...] }`
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::create(path).context("creating CSV file")?;
            write_csv(file, dataset)
        }
        "json" => {
            let file = std::fs::File::create(path).context("creating JSON file")?;
            write_json(std::io::BufWriter::new(file), dataset)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Header: `index,product_a,product_b,product_c,temperature,region,total`.
pub fn write_csv<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, row) in dataset.rows().iter().enumerate() {
        wtr.serialize(row)
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DatasetDocument<'a> {
    rows: &'a [SampleRow],
    stats: &'a SummaryStats,
    categories: &'a [CategorySummary],
    regions: &'a [RegionSummary],
}

/// NaN statistics are written as `null`.
pub fn write_json<W: Write>(mut writer: W, dataset: &Dataset) -> Result<()> {
    let doc = DatasetDocument {
        rows: dataset.rows(),
        stats: dataset.stats(),
        categories: dataset.categories(),
        regions: dataset.regions(),
    };
    serde_json::to_writer_pretty(&mut writer, &doc).context("serializing dataset to JSON")?;
    writer.flush().context("flushing JSON output")?;
    Ok(())
}
