use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use data_dashboard::config::DashboardParams;
use data_dashboard::data::assemble::assemble_dataset;
use data_dashboard::data::export::save_dataset;
use data_dashboard::data::matrix::run_matrix_demo;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let params = DashboardParams::default();
    let dataset = assemble_dataset(&params, &mut rng);

    for output_path in ["sample_dataset.csv", "sample_dataset.json"] {
        save_dataset(Path::new(output_path), &dataset)?;
        println!("Wrote {} rows to {output_path}", dataset.len());
    }

    let stats = dataset.stats();
    println!(
        "mean {}  std {}  corr {}  n {}",
        stats.mean_label(),
        stats.std_dev_label(),
        stats.correlation_label(),
        stats.count
    );
    for region in dataset.regions() {
        println!("  {:<6} {}", region.region, region.total);
    }

    println!("\n{}", run_matrix_demo(&mut rng));
    Ok(())
}
