#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl Color {
  pub const BLACK: Self = Self::rgb(0, 0, 0);
  pub const WHITE: Self = Self::rgb(255, 255, 255);
  pub const BLUE: Self = Self::rgb(0, 0, 255);
  pub const GRAY: Self = Self::rgb(128, 128, 128);
  /// First colour of the default cycle.
  pub const DEFAULT: Self = Self::rgb(31, 119, 180);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}
impl Default for Color {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Style of a scatter primitive. Opaque to everything but the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterStyle {
  /// Marker area in points².
  pub size: f64,
  pub color: Color,
  pub alpha: f64,
  /// Legend entry.
  pub label: Option<String>,
}
impl Default for ScatterStyle {
  fn default() -> Self {
    Self {
      size: 36.0,
      color: Color::DEFAULT,
      alpha: 1.0,
      label: None,
    }
  }
}
impl ScatterStyle {
  pub fn with_size(mut self, size: f64) -> Self {
    self.size = size;
    self
  }
  pub fn with_color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }
  pub fn with_alpha(mut self, alpha: f64) -> Self {
    self.alpha = alpha;
    self
  }
  pub fn with_label(mut self, label: impl Into<String>) -> Self {
    self.label = Some(label.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
  pub color: Color,
  /// Stroke width in points.
  pub width: f64,
}
impl Default for LineStyle {
  fn default() -> Self {
    Self {
      color: Color::DEFAULT,
      width: 1.5,
    }
  }
}
impl LineStyle {
  pub fn with_color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }
  pub fn with_width(mut self, width: f64) -> Self {
    self.width = width;
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
  pub color: Color,
  pub alpha: f64,
}
impl Default for BarStyle {
  fn default() -> Self {
    Self {
      color: Color::DEFAULT,
      alpha: 1.0,
    }
  }
}
impl BarStyle {
  pub fn with_color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }
  pub fn with_alpha(mut self, alpha: f64) -> Self {
    self.alpha = alpha;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scatter_builder() {
    let style = ScatterStyle::default()
      .with_size(10.0)
      .with_color(Color::BLUE)
      .with_label("samples");
    assert_eq!(style.size, 10.0);
    assert_eq!(style.color, Color::BLUE);
    assert_eq!(style.alpha, 1.0);
    assert_eq!(style.label.as_deref(), Some("samples"));
  }
}
