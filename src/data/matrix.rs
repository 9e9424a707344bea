use std::fmt;

use super::random::UniformSource;
use super::stats::std_dev;

pub type Matrix2 = [[f64; 2]; 2];

pub const MATRIX_A: Matrix2 = [[1.0, 2.0], [3.0, 4.0]];
pub const MATRIX_B: Matrix2 = [[5.0, 6.0], [7.0, 8.0]];

/// Standard 2×2 matrix product `a · b`.
pub fn multiply_2x2(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[0.0; 2]; 2];
    for (i, row) in a.iter().enumerate() {
        for j in 0..2 {
            out[i][j] = row[0] * b[0][j] + row[1] * b[1][j];
        }
    }
    out
}

/// A `rows × cols` grid of independent uniform values in `[0, 1)`.
pub fn random_matrix<S>(rows: usize, cols: usize, src: &mut S) -> Vec<Vec<f64>>
where
    S: UniformSource + ?Sized,
{
    (0..rows)
        .map(|_| (0..cols).map(|_| src.next_uniform()).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// MatrixReport – output of the "Matrix Ops" action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MatrixReport {
    pub product: Matrix2,
    pub random: Vec<Vec<f64>>,
    /// Population std-dev over every cell of `random`.
    pub random_std_dev: f64,
}

/// Multiply the fixed A and B matrices and draw a fresh 3×3 random matrix.
pub fn run_matrix_demo<S>(src: &mut S) -> MatrixReport
where
    S: UniformSource + ?Sized,
{
    let random = random_matrix(3, 3, src);
    let cells: Vec<f64> = random.iter().flatten().copied().collect();
    MatrixReport {
        product: multiply_2x2(&MATRIX_A, &MATRIX_B),
        random_std_dev: std_dev(&cells),
        random,
    }
}

impl fmt::Display for MatrixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1] = &self.product;
        writeln!(
            f,
            "Matrix A × B = [[{}, {}], [{}, {}]]",
            p0[0], p0[1], p1[0], p1[1]
        )?;
        let cols = self.random.first().map_or(0, Vec::len);
        writeln!(f, "Random {}×{} Matrix:", self.random.len(), cols)?;
        for row in &self.random {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        write!(f, "Std Dev of Random Matrix: {:.3}", self.random_std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::random::SequenceSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn multiplies_fixed_matrices_exactly() {
        assert_eq!(
            multiply_2x2(&MATRIX_A, &MATRIX_B),
            [[19.0, 22.0], [43.0, 50.0]]
        );
    }

    #[test]
    fn identity_is_neutral() {
        let id = [[1.0, 0.0], [0.0, 1.0]];
        assert_eq!(multiply_2x2(&MATRIX_A, &id), MATRIX_A);
        assert_eq!(multiply_2x2(&id, &MATRIX_B), MATRIX_B);
    }

    #[test]
    fn random_matrix_has_shape_and_unit_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let m = random_matrix(3, 3, &mut rng);
        assert_eq!(m.len(), 3);
        for row in &m {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|v| (0.0..1.0).contains(v)));
        }
    }

    #[test]
    fn report_formats_product_and_grid() {
        let mut src = SequenceSource::new(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        let report = run_matrix_demo(&mut src);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Matrix A × B = [[19, 22], [43, 50]]");
        assert_eq!(lines[1], "Random 3×3 Matrix:");
        assert_eq!(lines[2], "[0.100, 0.200, 0.300]");
        assert_eq!(lines[4], "[0.700, 0.800, 0.900]");
        assert_eq!(lines[5], "Std Dev of Random Matrix: 0.258");
    }
}
