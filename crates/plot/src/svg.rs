//! SVG export of a [`Figure`] through the plotters SVG backend.

use crate::{
  figure::{Axes, Figure, Locator, Primitive},
  style::Color,
  PlotError,
};

use itertools::Itertools;
use plotters::{
  chart::{ChartBuilder, SeriesLabelPosition},
  coord::Shift,
  drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea},
  element::{Circle, Rectangle, Text},
  prelude::SVGBackend,
  series::LineSeries,
  style::{Color as _, RGBColor, BLACK, WHITE},
};

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::Path,
};

/// Pixels per typographic point.
const PX_PER_PT: f64 = 100.0 / 72.0;
const FONT: &str = "sans-serif";
const FONT_SIZE: i32 = 14;

type DrawResult<T = ()> = Result<T, DrawingAreaErrorKind<std::io::Error>>;

pub fn figure_to_svg(figure: &Figure) -> Result<String, PlotError> {
  let mut svg = String::new();
  draw_figure(&mut svg, figure)?;
  Ok(svg)
}

pub fn save_figure_to_file(figure: &Figure, path: impl AsRef<Path>) -> Result<(), PlotError> {
  let svg = figure_to_svg(figure)?;
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  writer.write_all(svg.as_bytes())?;
  writer.flush()?;
  Ok(())
}

fn draw_figure(svg: &mut String, figure: &Figure) -> DrawResult {
  let [width, height] = figure.size();
  tracing::debug!("exporting {width}x{height} figure with {} axes", figure.naxes());

  let size = (width.round().max(1.0) as u32, height.round().max(1.0) as u32);
  let root = SVGBackend::with_string(svg, size).into_drawing_area();
  root.fill(&WHITE)?;
  let body = match figure.suptitle() {
    Some(title) => root.titled(title, (FONT, FONT_SIZE + 6))?,
    None => root.clone(),
  };

  let panels = body.split_evenly((figure.nrows(), figure.ncols()));
  for (panel, axes) in panels.iter().zip(figure.axes_iter()) {
    draw_axes(panel, axes)?;
  }
  root.present()
}

fn draw_axes(area: &DrawingArea<SVGBackend<'_>, Shift>, axes: &Axes) -> DrawResult {
  let ((xlo, xhi), (ylo, yhi)) = axes.view_limits();

  let mut builder = ChartBuilder::on(area);
  builder
    .margin(12)
    .x_label_area_size(if axes.xlocator() == Locator::Null { 8 } else { 40 })
    .y_label_area_size(if axes.ylocator() == Locator::Null { 8 } else { 56 });
  if let Some(title) = axes.title() {
    builder.caption(title, (FONT, FONT_SIZE + 2));
  }
  let mut chart = builder.build_cartesian_2d(xlo..xhi, ylo..yhi)?;

  {
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().label_style((FONT, FONT_SIZE - 2));
    if axes.xlocator() == Locator::Null {
      mesh.disable_x_axis();
    }
    if axes.ylocator() == Locator::Null {
      mesh.disable_y_axis();
    }
    if let Some(label) = axes.xlabel() {
      mesh.x_desc(label);
    }
    if let Some(label) = axes.ylabel() {
      mesh.y_desc(label);
    }
    mesh.draw()?;
  }

  for primitive in axes.primitives() {
    match primitive {
      Primitive::Line(line) => {
        let color = rgb(line.style.color);
        let width = (line.style.width * PX_PER_PT).round().max(1.0) as u32;
        chart.draw_series(LineSeries::new(
          line.xs.iter().copied().zip(line.ys.iter().copied()),
          color.stroke_width(width),
        ))?;
      }
      Primitive::Text(text) => {
        let [x, y] = text.position;
        chart.draw_series(std::iter::once(Text::new(
          text.content.clone(),
          (x, y),
          (FONT, FONT_SIZE),
        )))?;
      }
      Primitive::Scatter(scatter) => {
        let radius = marker_radius(scatter.style.size).round().max(1.0) as u32;
        let style = rgb(scatter.style.color).mix(scatter.style.alpha).filled();
        let anno = chart.draw_series(
          scatter
            .points
            .iter()
            .map(|&[x, y]| Circle::new((x, y), radius, style)),
        )?;
        if let Some(label) = &scatter.style.label {
          anno
            .label(label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), radius, style));
        }
      }
      Primitive::Bars(bars) => {
        let style = rgb(bars.style.color).mix(bars.style.alpha).filled();
        chart.draw_series(
          bars
            .edges
            .iter()
            .tuple_windows()
            .zip(&bars.heights)
            .map(|((&lo, &hi), &height)| Rectangle::new([(lo, 0.0), (hi, height)], style)),
        )?;
      }
    }
  }

  if axes.has_legend() {
    if axes.scatters().all(|s| s.style.label.is_none()) {
      tracing::warn!("legend requested but no scatter carries a label");
    } else {
      chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, FONT_SIZE - 2))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    }
  }
  Ok(())
}

fn rgb(color: Color) -> RGBColor {
  RGBColor(color.r, color.g, color.b)
}

/// Marker radius in pixels for a marker area in points².
pub fn marker_radius(size: f64) -> f64 {
  size.max(0.0).sqrt() / 2.0 * PX_PER_PT
}
