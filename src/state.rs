use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ChartType, DashboardParams};
use crate::data::assemble::assemble_dataset;
use crate::data::export::save_dataset;
use crate::data::matrix::{run_matrix_demo, MatrixReport};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current generation parameters (always within the slider ranges).
    pub params: DashboardParams,

    /// Which chart the central panel draws.
    pub chart_type: ChartType,

    /// Current batch; replaced wholesale on every regeneration.
    pub dataset: Dataset,

    /// Output of the last "Matrix Ops" action.
    pub matrix_report: Option<MatrixReport>,

    /// Whether the raw-row table window is open.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    rng: StdRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl AppState {
    /// Deterministic state for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let params = DashboardParams::default();
        let dataset = assemble_dataset(&params, &mut rng);
        Self {
            params,
            chart_type: ChartType::default(),
            dataset,
            matrix_report: None,
            show_table: false,
            status_message: None,
            rng,
        }
    }

    /// Rebuild the dataset from the current parameters and fresh randomness.
    pub fn regenerate(&mut self) {
        self.dataset = assemble_dataset(&self.params, &mut self.rng);
        log::debug!(
            "Regenerated {} rows (noise {}), mean total {:.2}",
            self.dataset.len(),
            self.params.noise_level,
            self.dataset.stats().mean
        );
    }

    /// Apply new parameters; regenerates only when something changed.
    pub fn set_params(&mut self, params: DashboardParams) {
        let params = params.clamped();
        if params != self.params {
            self.params = params;
            self.regenerate();
        }
    }

    pub fn set_point_count(&mut self, point_count: u32) {
        self.set_params(DashboardParams {
            point_count,
            ..self.params
        });
    }

    pub fn set_noise_level(&mut self, noise_level: u32) {
        self.set_params(DashboardParams {
            noise_level,
            ..self.params
        });
    }

    /// Run the matrix demo and keep its report for display.
    pub fn run_matrix_ops(&mut self) {
        let report = run_matrix_demo(&mut self.rng);
        log::info!("Matrix ops: random std-dev {:.3}", report.random_std_dev);
        self.matrix_report = Some(report);
    }

    /// Write the current dataset to `path`, recording failures in the status line.
    pub fn export_to(&mut self, path: &Path) {
        match save_dataset(path, &self.dataset) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", self.dataset.len(), path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_batch() {
        let state = AppState::with_seed(1);
        assert_eq!(state.dataset.len(), 50);
        assert_eq!(state.chart_type, ChartType::Line);
        assert!(state.matrix_report.is_none());
    }

    #[test]
    fn point_count_change_rebuilds_dataset() {
        let mut state = AppState::with_seed(2);
        state.set_point_count(80);
        assert_eq!(state.params.point_count, 80);
        assert_eq!(state.dataset.len(), 80);
    }

    #[test]
    fn unchanged_params_keep_the_batch() {
        let mut state = AppState::with_seed(3);
        let before = state.dataset.rows().to_vec();
        state.set_noise_level(state.params.noise_level);
        assert_eq!(state.dataset.rows(), before.as_slice());
    }

    #[test]
    fn regenerate_draws_a_new_batch() {
        let mut state = AppState::with_seed(4);
        let before = state.dataset.rows().to_vec();
        state.regenerate();
        assert_eq!(state.dataset.len(), before.len());
        assert_ne!(state.dataset.rows(), before.as_slice());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut state = AppState::with_seed(5);
        state.set_point_count(1_000);
        state.set_noise_level(0);
        assert_eq!(state.params.point_count, 100);
        assert_eq!(state.params.noise_level, 5);
        assert_eq!(state.dataset.len(), 100);
    }

    #[test]
    fn matrix_ops_store_a_report() {
        let mut state = AppState::with_seed(6);
        state.run_matrix_ops();
        let report = state.matrix_report.as_ref().unwrap();
        assert_eq!(report.product, [[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn failed_export_sets_status() {
        let mut state = AppState::with_seed(7);
        state.export_to(Path::new("dashboard.unsupported"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
    }
}
