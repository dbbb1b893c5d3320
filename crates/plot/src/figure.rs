use crate::style::{BarStyle, LineStyle, ScatterStyle};

use common::util::min_max;
use itertools::Itertools;

/// Closed interval `(lower, upper)` of an axis.
pub type Limits = (f64, f64);

/// Fraction of the data span added on both sides when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Placement of major ticks on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locator {
  #[default]
  Auto,
  /// No ticks at all.
  Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
  pub xs: Vec<f64>,
  pub ys: Vec<f64>,
  pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
  pub position: [f64; 2],
  pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
  pub points: Vec<[f64; 2]>,
  pub style: ScatterStyle,
}

/// Adjacent bars, e.g. a histogram. Bar `i` spans `edges[i]..edges[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
  pub edges: Vec<f64>,
  pub heights: Vec<f64>,
  pub style: BarStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
  Line(Line),
  Text(Text),
  Scatter(Scatter),
  Bars(Bars),
}
impl Primitive {
  /// Points that take part in autoscaling. Text does not.
  pub fn data_points(&self) -> Vec<[f64; 2]> {
    match self {
      Self::Line(line) => line
        .xs
        .iter()
        .zip(&line.ys)
        .map(|(&x, &y)| [x, y])
        .collect(),
      Self::Text(_) => Vec::new(),
      Self::Scatter(scatter) => scatter.points.clone(),
      Self::Bars(bars) => bars
        .edges
        .iter()
        .tuple_windows()
        .zip(&bars.heights)
        .flat_map(|((&lo, &hi), &height)| [[lo, 0.0], [hi, height]])
        .collect(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
  primitives: Vec<Primitive>,
  xlim: Option<Limits>,
  ylim: Option<Limits>,
  xlocator: Locator,
  ylocator: Locator,
  xlabel: Option<String>,
  ylabel: Option<String>,
  title: Option<String>,
  legend: bool,
}

impl Axes {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_line(&mut self, xs: Vec<f64>, ys: Vec<f64>, style: LineStyle) -> &mut Self {
    assert_eq!(xs.len(), ys.len(), "line coordinates differ in length");
    self.primitives.push(Primitive::Line(Line { xs, ys, style }));
    self
  }
  pub fn text(&mut self, x: f64, y: f64, content: impl Into<String>) -> &mut Self {
    self.primitives.push(Primitive::Text(Text {
      position: [x, y],
      content: content.into(),
    }));
    self
  }
  pub fn scatter(
    &mut self,
    points: impl IntoIterator<Item = [f64; 2]>,
    style: ScatterStyle,
  ) -> &mut Self {
    let points = points.into_iter().collect_vec();
    tracing::debug!("scatter of {} points", points.len());
    self
      .primitives
      .push(Primitive::Scatter(Scatter { points, style }));
    self
  }
  pub fn bars(&mut self, edges: Vec<f64>, heights: Vec<f64>, style: BarStyle) -> &mut Self {
    assert_eq!(edges.len(), heights.len() + 1, "need one more edge than bars");
    self.primitives.push(Primitive::Bars(Bars {
      edges,
      heights,
      style,
    }));
    self
  }

  pub fn set_xlim(&mut self, lower: f64, upper: f64) -> &mut Self {
    self.xlim = Some((lower, upper));
    self
  }
  pub fn set_ylim(&mut self, lower: f64, upper: f64) -> &mut Self {
    self.ylim = Some((lower, upper));
    self
  }
  pub fn set_xlocator(&mut self, locator: Locator) -> &mut Self {
    self.xlocator = locator;
    self
  }
  pub fn set_ylocator(&mut self, locator: Locator) -> &mut Self {
    self.ylocator = locator;
    self
  }
  pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
    self.xlabel = Some(label.into());
    self
  }
  pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
    self.ylabel = Some(label.into());
    self
  }
  pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
    self.title = Some(title.into());
    self
  }
  /// Show a legend of all labelled scatters.
  pub fn legend(&mut self) -> &mut Self {
    self.legend = true;
    self
  }

  pub fn primitives(&self) -> &[Primitive] {
    &self.primitives
  }
  pub fn lines(&self) -> impl Iterator<Item = &Line> {
    self.primitives.iter().filter_map(|p| match p {
      Primitive::Line(line) => Some(line),
      _ => None,
    })
  }
  pub fn texts(&self) -> impl Iterator<Item = &Text> {
    self.primitives.iter().filter_map(|p| match p {
      Primitive::Text(text) => Some(text),
      _ => None,
    })
  }
  pub fn scatters(&self) -> impl Iterator<Item = &Scatter> {
    self.primitives.iter().filter_map(|p| match p {
      Primitive::Scatter(scatter) => Some(scatter),
      _ => None,
    })
  }
  pub fn bar_sets(&self) -> impl Iterator<Item = &Bars> {
    self.primitives.iter().filter_map(|p| match p {
      Primitive::Bars(bars) => Some(bars),
      _ => None,
    })
  }

  pub fn xlim(&self) -> Option<Limits> {
    self.xlim
  }
  pub fn ylim(&self) -> Option<Limits> {
    self.ylim
  }
  pub fn xlocator(&self) -> Locator {
    self.xlocator
  }
  pub fn ylocator(&self) -> Locator {
    self.ylocator
  }
  pub fn xlabel(&self) -> Option<&str> {
    self.xlabel.as_deref()
  }
  pub fn ylabel(&self) -> Option<&str> {
    self.ylabel.as_deref()
  }
  pub fn title(&self) -> Option<&str> {
    self.title.as_deref()
  }
  pub fn has_legend(&self) -> bool {
    self.legend
  }

  /// Bounds of all finite data points as `(xlimits, ylimits)`.
  pub fn data_bounds(&self) -> Option<(Limits, Limits)> {
    let points = self
      .primitives
      .iter()
      .flat_map(|p| p.data_points())
      .filter(|[x, y]| x.is_finite() && y.is_finite())
      .collect_vec();
    let xs = min_max(points.iter().map(|p| p[0]))?;
    let ys = min_max(points.iter().map(|p| p[1]))?;
    Some((xs, ys))
  }

  /// Limits used for drawing, always finite and non-empty.
  ///
  /// Explicit limits win, otherwise the data bounds plus margin. Empty or inverted
  /// explicit limits are widened like a single data value.
  pub fn view_limits(&self) -> (Limits, Limits) {
    let bounds = self.data_bounds();
    let xlim = match self.xlim {
      Some(lim) => explicit(lim, bounds.map(|(x, _)| x)),
      None => autoscale(bounds.map(|(x, _)| x)),
    };
    let ylim = match self.ylim {
      Some(lim) => explicit(lim, bounds.map(|(_, y)| y)),
      None => autoscale(bounds.map(|(_, y)| y)),
    };
    (xlim, ylim)
  }
}

fn explicit((lo, hi): Limits, bounds: Option<Limits>) -> Limits {
  if !(lo.is_finite() && hi.is_finite()) {
    tracing::warn!("ignoring non-finite axis limits [{lo}, {hi}]");
    return autoscale(bounds);
  }
  if lo < hi {
    return (lo, hi);
  }
  tracing::warn!("widening empty axis limits [{lo}, {hi}]");
  let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
  autoscale(Some((lo, hi)))
}

fn autoscale(bounds: Option<Limits>) -> Limits {
  match bounds {
    None => (0.0, 1.0),
    Some((lo, hi)) if hi - lo <= 0.0 => (lo - 0.5, hi + 0.5),
    Some((lo, hi)) => {
      let margin = AUTOSCALE_MARGIN * (hi - lo);
      (lo - margin, hi + margin)
    }
  }
}

/// A grid of axes, filled row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
  axes: Vec<Axes>,
  nrows: usize,
  ncols: usize,
  suptitle: Option<String>,
  /// Size in pixels.
  size: [f64; 2],
}

impl Default for Figure {
  fn default() -> Self {
    Self::new()
  }
}

impl Figure {
  pub const PANEL_SIZE: [f64; 2] = [640.0, 480.0];

  pub fn new() -> Self {
    Self::subplots(1, 1)
  }

  pub fn subplots(nrows: usize, ncols: usize) -> Self {
    assert!(nrows > 0 && ncols > 0, "figure needs at least one axes");
    let axes = (0..nrows * ncols).map(|_| Axes::new()).collect();
    let size = [
      Self::PANEL_SIZE[0] * ncols as f64,
      Self::PANEL_SIZE[1] * nrows as f64,
    ];
    Self {
      axes,
      nrows,
      ncols,
      suptitle: None,
      size,
    }
  }

  pub fn with_size(mut self, width: f64, height: f64) -> Self {
    self.size = [width, height];
    self
  }

  pub fn nrows(&self) -> usize {
    self.nrows
  }
  pub fn ncols(&self) -> usize {
    self.ncols
  }
  pub fn naxes(&self) -> usize {
    self.axes.len()
  }
  pub fn size(&self) -> [f64; 2] {
    self.size
  }

  pub fn axes(&self, iaxes: usize) -> &Axes {
    &self.axes[iaxes]
  }
  pub fn axes_mut(&mut self, iaxes: usize) -> &mut Axes {
    &mut self.axes[iaxes]
  }
  pub fn axes_iter(&self) -> impl ExactSizeIterator<Item = &Axes> {
    self.axes.iter()
  }

  /// The current axes, which is always the first one.
  pub fn gca(&self) -> &Axes {
    &self.axes[0]
  }
  pub fn gca_mut(&mut self) -> &mut Axes {
    &mut self.axes[0]
  }

  pub fn set_suptitle(&mut self, title: impl Into<String>) -> &mut Self {
    self.suptitle = Some(title.into());
    self
  }
  pub fn suptitle(&self) -> Option<&str> {
    self.suptitle.as_deref()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::style::Color;

  use approx::assert_relative_eq;

  #[test]
  fn primitives_keep_order() {
    let mut axes = Axes::new();
    axes
      .add_line(vec![0.0, 1.0], vec![0.0, 1.0], LineStyle::default())
      .text(0.5, 0.5, "label")
      .scatter([[0.1, 0.2]], ScatterStyle::default());

    let kinds = axes
      .primitives()
      .iter()
      .map(|p| match p {
        Primitive::Line(_) => "line",
        Primitive::Text(_) => "text",
        Primitive::Scatter(_) => "scatter",
        Primitive::Bars(_) => "bars",
      })
      .collect_vec();
    assert_eq!(kinds, vec!["line", "text", "scatter"]);
    assert_eq!(axes.texts().next().unwrap().content, "label");
  }

  #[test]
  fn explicit_limits_win() {
    let mut axes = Axes::new();
    axes.scatter([[5.0, 5.0]], ScatterStyle::default());
    axes.set_xlim(-0.2, 1.2).set_ylim(-1.0, 2.0);
    assert_eq!(axes.view_limits(), ((-0.2, 1.2), (-1.0, 2.0)));
  }

  #[test]
  fn degenerate_explicit_limits() {
    let mut axes = Axes::new();
    axes.scatter([[1.0, 3.0], [2.0, 5.0]], ScatterStyle::default());
    axes.set_xlim(1.0, 1.0).set_ylim(f64::NAN, 2.0);
    let ((xlo, xhi), (ylo, yhi)) = axes.view_limits();
    assert_eq!((xlo, xhi), (0.5, 1.5));
    assert_relative_eq!(ylo, 2.9);
    assert_relative_eq!(yhi, 5.1);

    // inverted limits are sorted, then kept with a margin
    axes.set_xlim(2.0, 0.0);
    let ((xlo, xhi), _) = axes.view_limits();
    assert_relative_eq!(xlo, -0.1);
    assert_relative_eq!(xhi, 2.1);
  }

  #[test]
  fn autoscale_with_margin() {
    let mut axes = Axes::new();
    axes.scatter([[0.0, 1.0], [2.0, 3.0]], ScatterStyle::default());
    let ((xlo, xhi), (ylo, yhi)) = axes.view_limits();
    assert_relative_eq!(xlo, -0.1);
    assert_relative_eq!(xhi, 2.1);
    assert_relative_eq!(ylo, 0.9);
    assert_relative_eq!(yhi, 3.1);

    assert_eq!(Axes::new().view_limits(), ((0.0, 1.0), (0.0, 1.0)));
  }

  #[test]
  fn text_is_not_autoscaled() {
    let mut axes = Axes::new();
    axes.text(100.0, 100.0, "far away");
    assert_eq!(axes.data_bounds(), None);
  }

  #[test]
  fn bars_bounds() {
    let mut axes = Axes::new();
    axes.bars(
      vec![0.0, 0.5, 1.0],
      vec![1.0, 3.0],
      BarStyle::default().with_color(Color::GRAY),
    );
    assert_eq!(axes.data_bounds(), Some(((0.0, 1.0), (0.0, 3.0))));
  }

  #[test]
  fn subplot_grid() {
    let mut fig = Figure::subplots(1, 2);
    assert_eq!(fig.naxes(), 2);
    assert_eq!(fig.size(), [1280.0, 480.0]);
    fig.axes_mut(1).set_title("right");
    assert_eq!(fig.axes(1).title(), Some("right"));
    assert_eq!(fig.gca().title(), None);
  }
}
