//! Scatter plots of simplex points inside the triangle.

use simplex::{project_simplex, PointBatch, TRIANGLE_HEIGHT, TRIANGLE_VERTICES};

use plot::{Color, Figure, LineStyle, Locator, ScatterStyle};

/// Visible range of both axes, leaving room for the vertex labels.
pub const VIEW_LIMITS: (f64, f64) = (-0.2, 1.2);
/// Anchor of the label of each vertex.
pub const LABEL_POSITIONS: [[f64; 2]; 3] = [
  [-0.05, -0.05],
  [1.05, -0.05],
  [0.5, TRIANGLE_HEIGHT + 0.05],
];

/// Labels of the lower-left, lower-right and top vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLabels(pub [String; 3]);
impl Default for VertexLabels {
  fn default() -> Self {
    Self(["0".into(), "1".into(), "2".into()])
  }
}
impl<S: Into<String>> From<[S; 3]> for VertexLabels {
  fn from(labels: [S; 3]) -> Self {
    Self(labels.map(Into::into))
  }
}

/// Draws the triangle, its vertex labels and the projected `points` onto the
/// current axes of `figure`, or of a new figure.
///
/// `style` goes to the scatter unchanged.
pub fn plot_simplex(
  points: &PointBatch,
  figure: Option<Figure>,
  labels: &VertexLabels,
  style: ScatterStyle,
) -> Figure {
  let mut figure = figure.unwrap_or_default();
  let axes = figure.gca_mut();

  let [v0, v1, v2] = TRIANGLE_VERTICES;
  let outline = [v0, v2, v1, v0];
  axes.add_line(
    outline.iter().map(|v| v[0]).collect(),
    outline.iter().map(|v| v[1]).collect(),
    LineStyle::default().with_color(Color::BLACK),
  );
  axes.set_xlocator(Locator::Null);
  axes.set_ylocator(Locator::Null);

  for ([x, y], label) in LABEL_POSITIONS.iter().zip(&labels.0) {
    axes.text(*x, *y, label.clone());
  }

  let projected = project_simplex(points);
  let (lo, hi) = VIEW_LIMITS;
  let nhidden = projected
    .point_iter()
    .filter(|p| !(lo..=hi).contains(&p.x) || !(lo..=hi).contains(&p.y))
    .count();
  if nhidden > 0 {
    tracing::warn!("{nhidden} projected points fall outside of the visible range");
  }
  axes.scatter(projected.to_pairs(), style);

  axes.set_xlim(lo, hi);
  axes.set_ylim(lo, hi);

  figure
}
