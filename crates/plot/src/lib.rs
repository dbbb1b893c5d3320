//! Retained-mode plotting surface.
//!
//! A [`Figure`] owns a grid of [`Axes`], each of which records its drawing
//! primitives in order. Nothing is drawn until the figure is exported through
//! plotters, see [`svg::figure_to_svg`].

pub mod figure;
pub mod style;
pub mod svg;

pub use figure::{Axes, Bars, Figure, Limits, Line, Locator, Primitive, Scatter, Text};
pub use style::{BarStyle, Color, LineStyle, ScatterStyle};

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
  #[error("failed to draw figure: {0}")]
  Draw(#[from] plotters::drawing::DrawingAreaErrorKind<std::io::Error>),
  #[error("failed to write figure: {0}")]
  Io(#[from] std::io::Error),
}
