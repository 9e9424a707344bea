use std::fmt;

use serde::Serialize;

use super::stats::{mean, SummaryStats};

// ---------------------------------------------------------------------------
// Region – categorical label used for grouping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn name(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ---------------------------------------------------------------------------
// Product – the three category columns of a row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Product {
    A,
    B,
    C,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::A, Product::B, Product::C];

    pub fn name(self) -> &'static str {
        match self {
            Product::A => "Product A",
            Product::B => "Product B",
            Product::C => "Product C",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ---------------------------------------------------------------------------
// SampleRow – one simulated observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    /// 1-based position in the batch.
    pub index: u32,
    pub product_a: u32,
    pub product_b: u32,
    pub product_c: u32,
    /// Rounded to one decimal.
    pub temperature: f64,
    pub region: Region,
    /// Rounded sum of the raw (unclamped) product draws.
    pub total: i64,
}

impl SampleRow {
    pub fn product(&self, product: Product) -> u32 {
        match product {
            Product::A => self.product_a,
            Product::B => self.product_b,
            Product::C => self.product_c,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived chart views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub product: Product,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: Region,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Dataset – a row batch plus everything derived from it
// ---------------------------------------------------------------------------

/// A batch of rows and its summaries.
///
/// Fields are private: the only way to get a `Dataset` is [`Dataset::from_rows`],
/// so the summaries always describe exactly the rows they sit next to.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<SampleRow>,
    stats: SummaryStats,
    categories: Vec<CategorySummary>,
    regions: Vec<RegionSummary>,
}

impl Dataset {
    /// Compute summaries for a freshly generated batch.
    pub fn from_rows(rows: Vec<SampleRow>) -> Self {
        let totals: Vec<f64> = rows.iter().map(|r| r.total as f64).collect();
        let temps: Vec<f64> = rows.iter().map(|r| r.temperature).collect();
        let stats = SummaryStats::from_columns(&totals, &temps);

        let categories = Product::ALL
            .iter()
            .map(|&product| {
                let values: Vec<f64> = rows.iter().map(|r| r.product(product) as f64).collect();
                CategorySummary {
                    product,
                    mean: mean(&values),
                }
            })
            .collect();

        // Keyed by region, kept in first-seen order.
        let mut regions: Vec<RegionSummary> = Vec::new();
        for row in &rows {
            match regions.iter_mut().find(|s| s.region == row.region) {
                Some(summary) => summary.total += row.total,
                None => regions.push(RegionSummary {
                    region: row.region,
                    total: row.total,
                }),
            }
        }

        Dataset {
            rows,
            stats,
            categories,
            regions,
        }
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn regions(&self) -> &[RegionSummary] {
        &self.regions
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: u32, abc: [u32; 3], temperature: f64, region: Region) -> SampleRow {
        SampleRow {
            index,
            product_a: abc[0],
            product_b: abc[1],
            product_c: abc[2],
            temperature,
            region,
            total: abc.iter().map(|&v| v as i64).sum(),
        }
    }

    #[test]
    fn summaries_follow_rows() {
        let ds = Dataset::from_rows(vec![
            row(1, [100, 80, 60], 20.0, Region::East),
            row(2, [110, 70, 50], 25.0, Region::North),
            row(3, [90, 90, 70], 15.0, Region::East),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.stats().count, 3);
        assert!((ds.stats().mean - 240.0).abs() < 1e-12);

        let means: Vec<f64> = ds.categories().iter().map(|c| c.mean).collect();
        assert_eq!(means, vec![100.0, 80.0, 60.0]);

        assert_eq!(
            ds.regions(),
            &[
                RegionSummary { region: Region::East, total: 490 },
                RegionSummary { region: Region::North, total: 230 },
            ]
        );
    }

    #[test]
    fn empty_batch_yields_nan_stats() {
        let ds = Dataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.stats().count, 0);
        assert!(ds.stats().mean.is_nan());
        assert!(ds.regions().is_empty());
        assert!(ds.categories().iter().all(|c| c.mean.is_nan()));
    }

    #[test]
    fn region_names_display() {
        let names: Vec<String> = Region::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["North", "South", "East", "West"]);
    }
}
