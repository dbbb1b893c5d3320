//! Scatters Dirichlet samples on the simplex and histograms the aggregated
//! two-category marginal.

use simplexviz::{demo::DirichletDemo, io::save_dirichlet_demo};

use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let path = "out/dirichlet";
  let _ = fs::remove_dir_all(path);
  fs::create_dir_all(path)?;

  let demo = DirichletDemo::default();
  let output = demo.run(&mut rand::thread_rng())?;
  save_dirichlet_demo(&output, path)?;

  println!(
    "Histogram of {} samples in {} bins, see {path}.",
    output.histogram.total(),
    output.histogram.nbins()
  );
  Ok(())
}
