use crate::linalg::nalgebra::{Matrix, Vector, VectorView};

/// Map `x ↦ linear * x + translation`.
#[derive(Debug, Clone)]
pub struct AffineTransform {
  pub translation: Vector,
  pub linear: Matrix,
}
impl AffineTransform {
  pub fn new(translation: Vector, linear: Matrix) -> Self {
    assert_eq!(translation.len(), linear.nrows());
    Self {
      translation,
      linear,
    }
  }

  pub fn dim_domain(&self) -> usize {
    self.linear.ncols()
  }
  pub fn dim_image(&self) -> usize {
    self.linear.nrows()
  }

  pub fn apply_forward(&self, coord: VectorView) -> Vector {
    &self.linear * coord + &self.translation
  }

  /// Applies the transform to every column of `coords`.
  pub fn apply_forward_columns(&self, coords: &Matrix) -> Matrix {
    let mut image = &self.linear * coords;
    for mut col in image.column_iter_mut() {
      col += &self.translation;
    }
    image
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn columns_match_single() {
    let transform = AffineTransform::new(
      na::dvector![1.0, -1.0],
      na::dmatrix![1.0, 2.0, 0.0; 0.0, 1.0, 3.0],
    );
    assert_eq!(transform.dim_domain(), 3);
    assert_eq!(transform.dim_image(), 2);

    let coords = na::dmatrix![
      1.0, 0.0;
      0.5, 1.0;
      -1.0, 2.0;
    ];
    let image = transform.apply_forward_columns(&coords);
    for (icol, col) in coords.column_iter().enumerate() {
      let expected = transform.apply_forward(col);
      assert_relative_eq!(image.column(icol).into_owned(), expected);
    }
  }

  #[test]
  fn empty_batch() {
    let transform = AffineTransform::new(na::dvector![0.5], na::dmatrix![1.0, 1.0]);
    let image = transform.apply_forward_columns(&Matrix::zeros(2, 0));
    assert_eq!(image.shape(), (1, 0));
  }
}
