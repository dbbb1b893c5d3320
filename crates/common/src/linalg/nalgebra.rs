pub type Vector<T = f64> = na::DVector<T>;
pub type Matrix<T = f64> = na::DMatrix<T>;
pub type VectorView<'a, T = f64> = na::DVectorView<'a, T>;

pub trait DMatrixExt {
  fn is_symmetric(&self, eps: f64) -> bool;
}
impl DMatrixExt for na::DMatrix<f64> {
  fn is_symmetric(&self, eps: f64) -> bool {
    self.is_square() && (self - self.transpose()).amax() <= eps
  }
}

/// Build a column-major matrix from row-major rows of fixed width.
pub fn matrix_from_rows<T, const N: usize>(rows: &[[T; N]]) -> Matrix<T>
where
  T: na::Scalar,
{
  Matrix::from_fn(rows.len(), N, |i, j| rows[i][j].clone())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn symmetry() {
    assert!(na::dmatrix![1.3, 0.2; 0.2, 0.4].is_symmetric(0.0));
    assert!(na::dmatrix![1.0, 0.2; 0.2 + 1e-14, 1.0].is_symmetric(1e-12));
    assert!(!na::dmatrix![1.0, 0.5; 0.0, 1.0].is_symmetric(1e-12));
    assert!(!Matrix::zeros(2, 3).is_symmetric(1e-12));
  }

  #[test]
  fn rows_to_matrix() {
    let m = matrix_from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m, na::dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0]);

    let empty = matrix_from_rows::<f64, 3>(&[]);
    assert_eq!(empty.shape(), (0, 3));
  }
}
