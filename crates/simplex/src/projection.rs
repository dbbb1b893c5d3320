//! Projection of the 2-simplex onto the unit equilateral triangle.
//!
//! Every point starts at the triangle centroid and is pushed along the three
//! centroid-to-vertex directions, weighted by its coordinates.
//! The map is affine, so on normalized points it agrees with the barycentric
//! combination of [`TRIANGLE_VERTICES`].

use crate::{
  coord::{PlanarBatch, PlanarPoint, PointBatch, SimplexPoint},
  SimplexError, CENTROID, CIRCUMRADIUS, COS_PI_6, NCATEGORIES, SIN_PI_6, TRIANGLE_HEIGHT,
  TRIANGLE_VERTICES,
};

use common::affine::AffineTransform;

/// Projects a single point. No validation, any finite triple is accepted.
pub fn project_point(point: &SimplexPoint) -> PlanarPoint {
  let [mut x, mut y] = CENTROID;

  // Bisector out of the lower-left vertex.
  let p0 = point[0];
  x -= CIRCUMRADIUS * p0 * COS_PI_6;
  y -= CIRCUMRADIUS * p0 * SIN_PI_6;

  // Bisector out of the lower-right vertex.
  let p1 = point[1];
  x += CIRCUMRADIUS * p1 * COS_PI_6;
  y -= CIRCUMRADIUS * p1 * SIN_PI_6;

  // Towards the top vertex.
  let p2 = point[2];
  y += CIRCUMRADIUS * p2;

  PlanarPoint::new(x, y)
}

/// Projects every point of the batch, preserving order.
pub fn project_simplex(points: &PointBatch) -> PlanarBatch {
  tracing::debug!("projecting {} simplex points", points.npoints());
  let mut planar = na::Matrix2xX::zeros(points.npoints());
  for (ipoint, point) in points.point_iter().enumerate() {
    planar.set_column(ipoint, &project_point(&point));
  }
  PlanarBatch::new(planar)
}

/// Like [`project_simplex`] but rejects points that are not on the simplex.
pub fn project_simplex_checked(points: &PointBatch, tol: f64) -> Result<PlanarBatch, SimplexError> {
  points.check_simplex(tol)?;
  Ok(project_simplex(points))
}

/// The projection as `x ↦ A p + c` with the displacement directions in the columns of `A`.
pub fn projection_transform() -> AffineTransform {
  let translation = na::dvector![CENTROID[0], CENTROID[1]];
  #[rustfmt::skip]
  let linear = na::dmatrix![
    -CIRCUMRADIUS * COS_PI_6, CIRCUMRADIUS * COS_PI_6, 0.0;
    -CIRCUMRADIUS * SIN_PI_6, -CIRCUMRADIUS * SIN_PI_6, CIRCUMRADIUS;
  ];
  AffineTransform::new(translation, linear)
}

/// Barycentric coordinates of a planar point with respect to [`TRIANGLE_VERTICES`].
///
/// Inverse of [`project_point`] on normalized points.
pub fn unproject_point(point: &PlanarPoint) -> SimplexPoint {
  let [x1, _] = TRIANGLE_VERTICES[1];
  let [x2, _] = TRIANGLE_VERTICES[2];
  let p2 = point.y / TRIANGLE_HEIGHT;
  let p1 = (point.x - x2 * p2) / x1;
  let p0 = 1.0 - p1 - p2;
  SimplexPoint::new(p0, p1, p2)
}

/// Whether the planar point lies in the closed triangle, up to `tol` in barycentric coordinates.
pub fn is_inside_triangle(point: &PlanarPoint, tol: f64) -> bool {
  let bary = unproject_point(point);
  (0..NCATEGORIES).all(|i| bary[i] >= -tol && bary[i] <= 1.0 + tol)
}
