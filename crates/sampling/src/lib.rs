//! Samplers for the distributions used by the demos and a histogram binner.
//!
//! Batches of samples are matrices with one sample per column.

extern crate nalgebra as na;

pub mod dirichlet;
pub mod histogram;
pub mod normal;

pub use dirichlet::Dirichlet;
pub use histogram::{sqrt_bin_count, Histogram};
pub use normal::MultivariateNormal;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
  #[error("need at least {min} categories, got {got}")]
  TooFewCategories { min: usize, got: usize },
  #[error("concentration {index} must be finite and positive, got {value}")]
  InvalidConcentration { index: usize, value: f64 },
  #[error("category {0} is out of range or used twice")]
  InvalidGrouping(usize),
  #[error("mean has dimension {mean} but covariance is {rows}x{cols}")]
  ShapeMismatch {
    mean: usize,
    rows: usize,
    cols: usize,
  },
  #[error("covariance is not symmetric positive definite")]
  NotPositiveDefinite,
  #[error("histogram needs at least one bin")]
  NoBins,
  #[error("histogram range [{0}, {1}] is invalid")]
  InvalidRange(f64, f64),
  #[error("cannot infer a histogram range from empty data")]
  EmptyData,
  #[error("cannot infer a histogram range from non-finite data")]
  NonFiniteData,
  #[error("distribution rejected parameters: {0}")]
  Distribution(#[from] rand_distr::DirichletError),
}
