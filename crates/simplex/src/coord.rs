use crate::{SimplexError, NCATEGORIES};

use itertools::Itertools;

/// Probability vector over three categories.
pub type SimplexPoint = na::Vector3<f64>;
/// Position in the plane of the triangle.
pub type PlanarPoint = na::Vector2<f64>;

/// Batch of simplex points, one point per column.
///
/// Points are not validated on construction.
/// Use [`PointBatch::check_simplex`] or [`PointBatch::normalized`] for that.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
  matrix: na::Matrix3xX<f64>,
}
impl PointBatch {
  pub fn new(matrix: na::Matrix3xX<f64>) -> Self {
    Self { matrix }
  }
  pub fn empty() -> Self {
    Self::new(na::Matrix3xX::zeros(0))
  }
  pub fn from_rows(rows: &[[f64; NCATEGORIES]]) -> Self {
    let matrix = na::Matrix3xX::from_fn(rows.len(), |icomp, ipoint| rows[ipoint][icomp]);
    Self::new(matrix)
  }
  pub fn from_points(points: impl IntoIterator<Item = SimplexPoint>) -> Self {
    let points = points.into_iter().collect_vec();
    let matrix = na::Matrix3xX::from_fn(points.len(), |icomp, ipoint| points[ipoint][icomp]);
    Self::new(matrix)
  }

  pub fn npoints(&self) -> usize {
    self.matrix.ncols()
  }
  pub fn is_empty(&self) -> bool {
    self.npoints() == 0
  }

  pub fn point(&self, ipoint: usize) -> SimplexPoint {
    self.matrix.column(ipoint).into_owned()
  }
  pub fn point_iter(&self) -> impl ExactSizeIterator<Item = SimplexPoint> + '_ {
    self.matrix.column_iter().map(|c| c.into_owned())
  }

  pub fn matrix(&self) -> &na::Matrix3xX<f64> {
    &self.matrix
  }
  pub fn into_matrix(self) -> na::Matrix3xX<f64> {
    self.matrix
  }

  /// Checks that every point is finite, non-negative and sums to 1 within `tol`.
  pub fn check_simplex(&self, tol: f64) -> Result<(), SimplexError> {
    for (ipoint, point) in self.matrix.column_iter().enumerate() {
      check_components(ipoint, point.iter().copied())?;
      let sum = point.sum();
      if (sum - 1.0).abs() > tol {
        return Err(SimplexError::NotNormalized { ipoint, sum });
      }
    }
    Ok(())
  }

  /// Rescales every point to sum to 1.
  pub fn normalized(&self) -> Result<Self, SimplexError> {
    let mut matrix = self.matrix.clone();
    for (ipoint, mut point) in matrix.column_iter_mut().enumerate() {
      check_components(ipoint, point.iter().copied())?;
      let sum = point.sum();
      if sum == 0.0 {
        return Err(SimplexError::ZeroSum { ipoint });
      }
      point /= sum;
    }
    Ok(Self::new(matrix))
  }
}

fn check_components(ipoint: usize, comps: impl Iterator<Item = f64>) -> Result<(), SimplexError> {
  for (icomp, value) in comps.enumerate() {
    if !value.is_finite() {
      return Err(SimplexError::NonFinite { ipoint, icomp });
    }
    if value < 0.0 {
      return Err(SimplexError::Negative {
        ipoint,
        icomp,
        value,
      });
    }
  }
  Ok(())
}

impl From<na::Matrix3xX<f64>> for PointBatch {
  fn from(matrix: na::Matrix3xX<f64>) -> Self {
    Self::new(matrix)
  }
}
impl TryFrom<na::DMatrix<f64>> for PointBatch {
  type Error = SimplexError;

  /// Expects one point per column.
  fn try_from(matrix: na::DMatrix<f64>) -> Result<Self, Self::Error> {
    if matrix.nrows() != NCATEGORIES {
      return Err(SimplexError::WrongDimension {
        expected: NCATEGORIES,
        got: matrix.nrows(),
      });
    }
    let matrix = na::Matrix3xX::from_column_slice(matrix.as_slice());
    Ok(Self::new(matrix))
  }
}

/// Batch of planar points, one point per column.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarBatch {
  matrix: na::Matrix2xX<f64>,
}
impl PlanarBatch {
  pub fn new(matrix: na::Matrix2xX<f64>) -> Self {
    Self { matrix }
  }

  pub fn npoints(&self) -> usize {
    self.matrix.ncols()
  }
  pub fn is_empty(&self) -> bool {
    self.npoints() == 0
  }

  pub fn point(&self, ipoint: usize) -> PlanarPoint {
    self.matrix.column(ipoint).into_owned()
  }
  pub fn point_iter(&self) -> impl ExactSizeIterator<Item = PlanarPoint> + '_ {
    self.matrix.column_iter().map(|c| c.into_owned())
  }
  pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
    (0..self.npoints()).map(|ipoint| self.matrix[(0, ipoint)])
  }
  pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
    (0..self.npoints()).map(|ipoint| self.matrix[(1, ipoint)])
  }

  pub fn matrix(&self) -> &na::Matrix2xX<f64> {
    &self.matrix
  }
  pub fn into_matrix(self) -> na::Matrix2xX<f64> {
    self.matrix
  }

  pub fn to_pairs(&self) -> Vec<[f64; 2]> {
    self.point_iter().map(|p| [p.x, p.y]).collect()
  }

  /// Axis-aligned bounds as `(min, max)`. `None` for an empty batch.
  pub fn bounding_box(&self) -> Option<(PlanarPoint, PlanarPoint)> {
    if self.is_empty() {
      return None;
    }
    let min = PlanarPoint::new(self.matrix.row(0).min(), self.matrix.row(1).min());
    let max = PlanarPoint::new(self.matrix.row(0).max(), self.matrix.row(1).max());
    Some((min, max))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rows_become_columns() {
    let batch = PointBatch::from_rows(&[[0.2, 0.3, 0.5], [1.0, 0.0, 0.0]]);
    assert_eq!(batch.npoints(), 2);
    assert_eq!(batch.point(0), SimplexPoint::new(0.2, 0.3, 0.5));
    assert_eq!(batch.point(1), SimplexPoint::new(1.0, 0.0, 0.0));

    let from_points = PointBatch::from_points(batch.point_iter());
    assert_eq!(from_points, batch);
  }

  #[test]
  fn dynamic_matrix_conversion() {
    let dynamic = na::DMatrix::from_column_slice(3, 2, &[0.2, 0.3, 0.5, 0.1, 0.1, 0.8]);
    let batch = PointBatch::try_from(dynamic).unwrap();
    assert_eq!(batch.npoints(), 2);
    assert_eq!(batch.point(1), SimplexPoint::new(0.1, 0.1, 0.8));

    let empty = PointBatch::try_from(na::DMatrix::<f64>::zeros(3, 0)).unwrap();
    assert!(empty.is_empty());

    let wrong = na::DMatrix::<f64>::zeros(2, 4);
    assert_eq!(
      PointBatch::try_from(wrong),
      Err(SimplexError::WrongDimension {
        expected: 3,
        got: 2
      })
    );
  }

  #[test]
  fn simplex_check() {
    let valid = PointBatch::from_rows(&[[0.2, 0.3, 0.5], [0.0, 0.0, 1.0]]);
    assert_eq!(valid.check_simplex(1e-12), Ok(()));
    assert_eq!(PointBatch::empty().check_simplex(1e-12), Ok(()));

    let unnormalized = PointBatch::from_rows(&[[0.2, 0.3, 0.5], [1.0, 1.0, 1.0]]);
    assert!(matches!(
      unnormalized.check_simplex(1e-9),
      Err(SimplexError::NotNormalized { ipoint: 1, .. })
    ));

    let negative = PointBatch::from_rows(&[[-0.5, 1.0, 0.5]]);
    assert!(matches!(
      negative.check_simplex(1e-9),
      Err(SimplexError::Negative {
        ipoint: 0,
        icomp: 0,
        ..
      })
    ));

    let nan = PointBatch::from_rows(&[[0.5, f64::NAN, 0.5]]);
    assert_eq!(
      nan.check_simplex(1e-9),
      Err(SimplexError::NonFinite { ipoint: 0, icomp: 1 })
    );
  }

  #[test]
  fn normalization() {
    let batch = PointBatch::from_rows(&[[1.0, 1.0, 2.0], [0.0, 3.0, 0.0]]);
    let normalized = batch.normalized().unwrap();
    assert_eq!(normalized.point(0), SimplexPoint::new(0.25, 0.25, 0.5));
    assert_eq!(normalized.point(1), SimplexPoint::new(0.0, 1.0, 0.0));
    assert_eq!(normalized.check_simplex(1e-12), Ok(()));

    let zero = PointBatch::from_rows(&[[0.2, 0.3, 0.5], [0.0, 0.0, 0.0]]);
    assert_eq!(zero.normalized(), Err(SimplexError::ZeroSum { ipoint: 1 }));
  }

  #[test]
  fn planar_bounds() {
    let batch = PlanarBatch::new(na::Matrix2xX::from_column_slice(&[
      0.0, 1.0, 0.5, -0.25, 2.0, 0.0,
    ]));
    let (min, max) = batch.bounding_box().unwrap();
    assert_eq!(min, PlanarPoint::new(0.0, -0.25));
    assert_eq!(max, PlanarPoint::new(2.0, 1.0));
    assert_eq!(batch.xs().collect::<Vec<_>>(), vec![0.0, 0.5, 2.0]);
    assert_eq!(batch.to_pairs()[1], [0.5, -0.25]);

    let empty = PlanarBatch::new(na::Matrix2xX::zeros(0));
    assert!(empty.bounding_box().is_none());
  }
}
