//! Scatters bivariate normal samples next to their second coordinate and
//! histograms that coordinate.

use simplexviz::{demo::GaussianDemo, io::save_gaussian_demo};

use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let path = "out/gaussian";
  let _ = fs::remove_dir_all(path);
  fs::create_dir_all(path)?;

  let demo = GaussianDemo::default();
  let output = demo.run(&mut rand::thread_rng())?;
  save_gaussian_demo(&output, path)?;

  println!("Wrote {path}/gaussian.svg.");
  Ok(())
}
