/// Numeric core: random sampling, statistics, matrices, dataset assembly and export.
///
/// Architecture:
/// ```text
///   UniformSource (thread_rng / StdRng / test double)
///        │
///        ▼
///   ┌──────────┐
///   │  random   │  generate_samples, pick_index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐     ┌─────────┐
///   │ assemble  │ ──▶ │  stats   │  mean, std_dev, correlation
///   └──────────┘     └─────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  rows + summary stats + category / region views
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  .csv / .json
///   └──────────┘
///
///   matrix: multiply_2x2, random_matrix → MatrixReport (independent of the above)
/// ```
pub mod assemble;
pub mod export;
pub mod matrix;
pub mod model;
pub mod random;
pub mod stats;
