use crate::SamplingError;

use common::linalg::nalgebra::{DMatrixExt, Matrix, Vector};
use rand::Rng;
use rand_distr::StandardNormal;

/// Multivariate normal distribution, sampled as `L z + μ` with `Σ = L Lᵀ`.
#[derive(Debug, Clone)]
pub struct MultivariateNormal {
  mean: Vector,
  covariance: Matrix,
  cholesky_factor: Matrix,
}

impl MultivariateNormal {
  pub fn new(mean: Vector, covariance: Matrix) -> Result<Self, SamplingError> {
    let (rows, cols) = covariance.shape();
    if rows != cols || rows != mean.len() {
      return Err(SamplingError::ShapeMismatch {
        mean: mean.len(),
        rows,
        cols,
      });
    }
    if !covariance.is_symmetric(1e-12) {
      return Err(SamplingError::NotPositiveDefinite);
    }
    let cholesky_factor = na::Cholesky::new(covariance.clone())
      .ok_or(SamplingError::NotPositiveDefinite)?
      .unpack();
    Ok(Self {
      mean,
      covariance,
      cholesky_factor,
    })
  }

  pub fn dim(&self) -> usize {
    self.mean.len()
  }
  pub fn mean(&self) -> &Vector {
    &self.mean
  }
  pub fn covariance(&self) -> &Matrix {
    &self.covariance
  }

  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    let z = Vector::from_fn(self.dim(), |_, _| rng.sample::<f64, _>(StandardNormal));
    &self.cholesky_factor * z + &self.mean
  }

  /// `d × n` matrix of `n` independent samples.
  pub fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, nsamples: usize) -> Matrix {
    tracing::debug!("drawing {nsamples} normal samples of dimension {}", self.dim());
    let z = Matrix::from_fn(self.dim(), nsamples, |_, _| {
      rng.sample::<f64, _>(StandardNormal)
    });
    let mut samples = &self.cholesky_factor * z;
    for mut column in samples.column_iter_mut() {
      column += &self.mean;
    }
    samples
  }
}
