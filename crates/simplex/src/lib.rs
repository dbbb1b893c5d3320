//! Probability vectors over three categories and their embedding
//! into a fixed equilateral triangle of unit side length.
//!
//! - Lower-left vertex: category 0 at `(0, 0)`.
//! - Lower-right vertex: category 1 at `(1, 0)`.
//! - Top vertex: category 2 at `(1/2, √3/2)`.

extern crate nalgebra as na;

pub mod coord;
pub mod projection;

pub use coord::{PlanarBatch, PlanarPoint, PointBatch, SimplexPoint};
pub use projection::{
  is_inside_triangle, project_point, project_simplex, project_simplex_checked,
  projection_transform, unproject_point,
};

/// Number of categories of a point on the 2-simplex.
pub const NCATEGORIES: usize = 3;

pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const TRIANGLE_HEIGHT: f64 = SQRT_3 / 2.0;
/// Distance from the centroid to every vertex.
pub const CIRCUMRADIUS: f64 = 1.0 / SQRT_3;
pub const COS_PI_6: f64 = SQRT_3 / 2.0;
pub const SIN_PI_6: f64 = 0.5;

pub const TRIANGLE_VERTICES: [[f64; 2]; NCATEGORIES] =
  [[0.0, 0.0], [1.0, 0.0], [0.5, TRIANGLE_HEIGHT]];
pub const CENTROID: [f64; 2] = [0.5, 1.0 / (2.0 * SQRT_3)];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimplexError {
  #[error("expected {expected} coordinates per point, got {got}")]
  WrongDimension { expected: usize, got: usize },
  #[error("point {ipoint} has non-finite coordinate {icomp}")]
  NonFinite { ipoint: usize, icomp: usize },
  #[error("point {ipoint} has negative coordinate {icomp} = {value}")]
  Negative {
    ipoint: usize,
    icomp: usize,
    value: f64,
  },
  #[error("point {ipoint} sums to {sum}, not 1")]
  NotNormalized { ipoint: usize, sum: f64 },
  #[error("point {ipoint} sums to zero and cannot be normalized")]
  ZeroSum { ipoint: usize },
}
