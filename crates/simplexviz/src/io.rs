use crate::{
  demo::{DirichletDemoOutput, GaussianDemoOutput},
  DemoError,
};

use plot::svg::save_figure_to_file;
use sampling::Histogram;
use simplex::project_simplex;

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

/// Writes one point per line, components separated by spaces.
pub fn write_points<W, P>(mut writer: W, points: impl IntoIterator<Item = P>) -> io::Result<()>
where
  W: Write,
  P: IntoIterator<Item = f64>,
{
  for point in points {
    for comp in point {
      write!(writer, "{comp:.6} ")?;
    }
    writeln!(writer)?;
  }
  Ok(())
}

pub fn save_points_to_file<P>(
  points: impl IntoIterator<Item = P>,
  path: impl AsRef<Path>,
) -> io::Result<()>
where
  P: IntoIterator<Item = f64>,
{
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  write_points(&mut writer, points)?;
  writer.flush()
}

/// One line per bin: lower edge, upper edge, count, density.
pub fn save_histogram_to_file(histogram: &Histogram, path: impl AsRef<Path>) -> io::Result<()> {
  let rows = histogram
    .edges()
    .windows(2)
    .zip(histogram.counts())
    .zip(histogram.densities())
    .map(|((edges, &count), density)| [edges[0], edges[1], count as f64, density]);
  save_points_to_file(rows, path)
}

/// Writes the data dumps first, then the figures.
pub fn save_dirichlet_demo(
  output: &DirichletDemoOutput,
  dir: impl AsRef<Path>,
) -> Result<(), DemoError> {
  let dir = dir.as_ref();
  let projected = project_simplex(&output.samples);

  save_points_to_file(
    output.samples.point_iter().map(|p| [p.x, p.y, p.z]),
    dir.join("samples.txt"),
  )?;
  save_points_to_file(projected.to_pairs(), dir.join("projected.txt"))?;
  save_histogram_to_file(&output.histogram, dir.join("histogram.txt"))?;
  save_figure_to_file(&output.scatter, dir.join("scatter.svg"))?;
  save_figure_to_file(&output.histogram_figure, dir.join("histogram.svg"))?;

  tracing::info!("wrote Dirichlet demo to {}", dir.display());
  Ok(())
}

pub fn save_gaussian_demo(
  output: &GaussianDemoOutput,
  dir: impl AsRef<Path>,
) -> Result<(), DemoError> {
  let dir = dir.as_ref();

  save_points_to_file(
    output.samples.column_iter().map(|c| [c[0], c[1]]),
    dir.join("samples.txt"),
  )?;
  save_histogram_to_file(&output.histogram, dir.join("histogram.txt"))?;
  save_figure_to_file(&output.figure, dir.join("gaussian.svg"))?;

  tracing::info!("wrote Gaussian demo to {}", dir.display());
  Ok(())
}
