use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Dashboard parameters
// ---------------------------------------------------------------------------

pub const POINT_COUNT_RANGE: RangeInclusive<u32> = 10..=100;
pub const NOISE_LEVEL_RANGE: RangeInclusive<u32> = 5..=50;

/// Environment variable that fixes the random seed for a session.
pub const SEED_ENV: &str = "DASHBOARD_SEED";

/// The parameters that drive dataset generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    /// Number of rows per batch.
    pub point_count: u32,
    /// Spread of the product draws.
    pub noise_level: u32,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            point_count: 50,
            noise_level: 20,
        }
    }
}

impl DashboardParams {
    /// Clamp both values into the ranges the UI controls allow.
    pub fn clamped(self) -> Self {
        Self {
            point_count: self
                .point_count
                .clamp(*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end()),
            noise_level: self
                .noise_level
                .clamp(*NOISE_LEVEL_RANGE.start(), *NOISE_LEVEL_RANGE.end()),
        }
    }
}

/// Read [`SEED_ENV`]. Unset or unparsable values mean "seed from entropy".
pub fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring {SEED_ENV}={raw:?}: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Chart type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
    Scatter,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Scatter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Scatter => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_ranges() {
        let p = DashboardParams::default();
        assert!(POINT_COUNT_RANGE.contains(&p.point_count));
        assert!(NOISE_LEVEL_RANGE.contains(&p.noise_level));
        assert_eq!(p.clamped(), p);
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let p = DashboardParams {
            point_count: 3,
            noise_level: 500,
        }
        .clamped();
        assert_eq!(p.point_count, 10);
        assert_eq!(p.noise_level, 50);
    }

    #[test]
    fn default_chart_is_line() {
        assert_eq!(ChartType::default(), ChartType::Line);
        assert_eq!(ChartType::Scatter.to_string(), "Scatter Plot");
    }
}
