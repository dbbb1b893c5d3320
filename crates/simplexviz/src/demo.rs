//! Sampling demos: a Dirichlet on the simplex and a bivariate normal.

use crate::{
  render::{plot_simplex, VertexLabels},
  DemoError,
};

use common::linalg::nalgebra::matrix_from_rows;
use plot::{BarStyle, Color, Figure, ScatterStyle};
use rand::Rng;
use sampling::{sqrt_bin_count, Dirichlet, Histogram, MultivariateNormal};
use simplex::PointBatch;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct DirichletDemo {
  pub alphas: [f64; 3],
  pub nsamples_scatter: usize,
  pub nsamples_histogram: usize,
  /// Marker area in points².
  pub marker_size: f64,
}
impl Default for DirichletDemo {
  fn default() -> Self {
    Self {
      alphas: [5.0, 13.0, 2.0],
      nsamples_scatter: 100,
      nsamples_histogram: 1_000_000,
      marker_size: 10.0,
    }
  }
}

#[derive(Debug, Clone)]
pub struct DirichletDemoOutput {
  pub samples: PointBatch,
  pub scatter: Figure,
  /// First category against the other two merged.
  pub aggregated: Dirichlet,
  pub histogram: Histogram,
  pub histogram_figure: Figure,
}

impl DirichletDemo {
  pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DirichletDemoOutput, DemoError> {
    let dirichlet = Dirichlet::new(self.alphas.to_vec())?;
    let alphas = format_alphas(&self.alphas);

    tracing::info!("scattering {} samples of Dirichlet {alphas}", self.nsamples_scatter);
    let samples = PointBatch::try_from(dirichlet.sample_batch(rng, self.nsamples_scatter))?;
    let mut scatter = plot_simplex(
      &samples,
      None,
      &VertexLabels::default(),
      ScatterStyle::default().with_size(self.marker_size),
    );
    scatter
      .gca_mut()
      .set_title(format!("Scatter plot of 3D Dirichlet with alphas {alphas}"));

    let aggregated = dirichlet.aggregate(&[&[0], &[1, 2]])?;
    let nbins = sqrt_bin_count(self.nsamples_histogram);
    tracing::info!(
      "histogram of {} aggregated samples in {nbins} bins",
      self.nsamples_histogram
    );
    let marginal = aggregated.sample_batch(rng, self.nsamples_histogram);
    let histogram = Histogram::new(marginal.row(1).iter().copied(), nbins)?;

    let mut histogram_figure = Figure::new();
    histogram_figure
      .gca_mut()
      .bars(
        histogram.edges().to_vec(),
        histogram.densities(),
        BarStyle::default(),
      )
      .set_xlabel(format!(
        "First dimension<{}>Second and third dimension aggregated",
        "-".repeat(20)
      ))
      .set_ylabel(format!(
        "Normalized histogram of {} samples",
        self.nsamples_histogram
      ))
      .set_title("Histogram of aggregated 3D Dirichlet")
      .set_xlim(0.0, 1.0);

    Ok(DirichletDemoOutput {
      samples,
      scatter,
      aggregated,
      histogram,
      histogram_figure,
    })
  }
}

/// `[5, 13, 2]` style listing.
fn format_alphas(alphas: &[f64]) -> String {
  format!("[{}]", alphas.iter().join(", "))
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaussianDemo {
  pub mean: [f64; 2],
  pub covariance: [[f64; 2]; 2],
  pub nsamples_scatter: usize,
  pub nsamples_histogram: usize,
  /// Range of both scatter axes.
  pub limits: (f64, f64),
}
impl Default for GaussianDemo {
  fn default() -> Self {
    Self {
      mean: [2.3, -1.2],
      covariance: [[1.3, 0.2], [0.2, 0.4]],
      nsamples_scatter: 100,
      nsamples_histogram: 1_000_000,
      limits: (-5.0, 5.0),
    }
  }
}

#[derive(Debug, Clone)]
pub struct GaussianDemoOutput {
  /// `2 × n`, one sample per column.
  pub samples: na::DMatrix<f64>,
  /// Of the second coordinate of an independent batch.
  pub histogram: Histogram,
  pub figure: Figure,
}

impl GaussianDemo {
  pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GaussianDemoOutput, DemoError> {
    let normal = MultivariateNormal::new(
      na::DVector::from_column_slice(&self.mean),
      matrix_from_rows(&self.covariance),
    )?;

    tracing::info!("scattering {} bivariate normal samples", self.nsamples_scatter);
    let samples = normal.sample_batch(rng, self.nsamples_scatter);
    let points = samples.column_iter().map(|c| [c[0], c[1]]).collect_vec();
    let projected = points.iter().map(|&[_, y]| [0.0, y]).collect_vec();

    let mut figure = Figure::subplots(1, 2);
    let (lo, hi) = self.limits;
    figure
      .axes_mut(0)
      .scatter(
        points,
        ScatterStyle::default()
          .with_color(Color::BLUE)
          .with_label("2D mvn"),
      )
      .scatter(
        projected,
        ScatterStyle::default()
          .with_color(Color::BLACK)
          .with_label("Second axis of 2D mvn"),
      )
      .set_xlim(lo, hi)
      .set_ylim(lo, hi)
      .set_xlabel("First axis")
      .set_ylabel("Second axis")
      .legend();

    let nbins = sqrt_bin_count(self.nsamples_histogram);
    tracing::info!(
      "histogram of {} fresh samples in {nbins} bins",
      self.nsamples_histogram
    );
    let fresh = normal.sample_batch(rng, self.nsamples_histogram);
    let histogram = Histogram::new(fresh.row(1).iter().copied(), nbins)?;
    figure
      .axes_mut(1)
      .bars(
        histogram.edges().to_vec(),
        histogram.densities(),
        BarStyle::default(),
      )
      .set_xlabel("Second axis of scatter");

    Ok(GaussianDemoOutput {
      samples,
      histogram,
      figure,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn alphas_listing() {
    assert_eq!(format_alphas(&[5.0, 13.0, 2.0]), "[5, 13, 2]");
    assert_eq!(format_alphas(&[0.5, 1.0]), "[0.5, 1]");
  }

  #[test]
  fn small_dirichlet_run() {
    let demo = DirichletDemo {
      nsamples_scatter: 20,
      nsamples_histogram: 400,
      ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let output = demo.run(&mut rng).unwrap();
    assert_eq!(output.samples.npoints(), 20);
    assert_eq!(output.aggregated.alphas(), &[5.0, 15.0]);
    assert_eq!(output.histogram.nbins(), 20);
    assert_eq!(output.histogram.total(), 400);
    assert_eq!(
      output.scatter.gca().title(),
      Some("Scatter plot of 3D Dirichlet with alphas [5, 13, 2]")
    );
    assert_eq!(output.histogram_figure.gca().xlim(), Some((0.0, 1.0)));
  }

  #[test]
  fn invalid_alphas_fail() {
    let demo = DirichletDemo {
      alphas: [5.0, -1.0, 2.0],
      ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(demo.run(&mut rng), Err(DemoError::Sampling(_))));
  }

  #[test]
  fn small_gaussian_run() {
    let demo = GaussianDemo {
      nsamples_scatter: 30,
      nsamples_histogram: 900,
      ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(2);
    let output = demo.run(&mut rng).unwrap();
    assert_eq!(output.samples.shape(), (2, 30));
    assert_eq!(output.histogram.nbins(), 30);
    assert_eq!(output.figure.naxes(), 2);

    let left = output.figure.axes(0);
    assert_eq!(left.scatters().count(), 2);
    assert!(left.has_legend());
    let flattened = left.scatters().nth(1).unwrap();
    assert!(flattened.points.iter().all(|p| p[0] == 0.0));
    assert_eq!(output.figure.axes(1).bar_sets().count(), 1);
  }

  #[test]
  fn indefinite_covariance_fails() {
    let demo = GaussianDemo {
      covariance: [[1.0, 2.0], [2.0, 1.0]],
      ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(demo.run(&mut rng), Err(DemoError::Sampling(_))));
  }
}
