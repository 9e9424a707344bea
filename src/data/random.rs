use rand::{Rng, RngCore};

// ---------------------------------------------------------------------------
// Uniform random source
// ---------------------------------------------------------------------------

/// A source of uniform values in `[0, 1)`.
///
/// Everything random in the numeric core goes through this trait. Any `rand`
/// generator qualifies; tests also use a scripted source.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

// ---------------------------------------------------------------------------
// Sample generation
// ---------------------------------------------------------------------------

/// Generate `count` samples spread uniformly over `[center - spread, center + spread)`.
///
/// This is a "normal-like" shape only in the loose sense that values cluster
/// around `center`; it is not Gaussian.
pub fn generate_samples<S>(center: f64, spread: f64, count: usize, src: &mut S) -> Vec<f64>
where
    S: UniformSource + ?Sized,
{
    (0..count)
        .map(|_| center + spread * (src.next_uniform() - 0.5) * 2.0)
        .collect()
}

/// Uniform index in `[0, len)`. `len` must be non-zero.
pub fn pick_index<S>(len: usize, src: &mut S) -> usize
where
    S: UniformSource + ?Sized,
{
    debug_assert!(len > 0);
    let i = (src.next_uniform() * len as f64).floor() as usize;
    // next_uniform() is < 1.0, but guard the edge anyway
    i.min(len - 1)
}

/// Scripted source for tests: cycles through a fixed list of values.
#[cfg(test)]
pub(crate) struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::std_dev;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_count_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 10, 100] {
            assert_eq!(generate_samples(5.0, 3.0, n, &mut rng).len(), n);
        }
        assert_eq!(generate_samples(5.0, 0.0, 7, &mut rng).len(), 7);
        assert!(generate_samples(5.0, 3.0, 0, &mut rng).is_empty());
    }

    #[test]
    fn samples_stay_within_spread_of_center() {
        let mut rng = StdRng::seed_from_u64(11);
        let xs = generate_samples(100.0, 20.0, 500, &mut rng);
        assert!(xs.iter().all(|&x| (80.0..120.0).contains(&x)));
    }

    #[test]
    fn midpoint_draw_lands_on_center() {
        let mut src = SequenceSource::new(&[0.5]);
        assert_eq!(generate_samples(42.0, 10.0, 3, &mut src), vec![42.0; 3]);
    }

    #[test]
    fn larger_spread_gives_larger_dispersion() {
        let narrow = generate_samples(0.0, 1.0, 200, &mut StdRng::seed_from_u64(3));
        let wide = generate_samples(0.0, 10.0, 200, &mut StdRng::seed_from_u64(3));
        assert!(std_dev(&wide) > std_dev(&narrow));
    }

    #[test]
    fn pick_index_covers_range() {
        let mut src = SequenceSource::new(&[0.0, 0.24, 0.25, 0.999_999]);
        let picks: Vec<usize> = (0..4).map(|_| pick_index(4, &mut src)).collect();
        assert_eq!(picks, vec![0, 0, 1, 3]);
    }
}
