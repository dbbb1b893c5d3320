extern crate nalgebra as na;

pub mod demo;
pub mod io;
pub mod render;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
  #[error(transparent)]
  Simplex(#[from] simplex::SimplexError),
  #[error(transparent)]
  Sampling(#[from] sampling::SamplingError),
  #[error(transparent)]
  Plot(#[from] plot::PlotError),
  #[error("failed to write demo output: {0}")]
  Io(#[from] std::io::Error),
}
