use crate::SamplingError;

use common::util::{min_max, CumsumExt};
use itertools::Itertools;

/// Integer square root, the bin count used for large sample histograms.
pub fn sqrt_bin_count(nsamples: usize) -> usize {
  let mut root = (nsamples as f64).sqrt() as usize;
  while root * root > nsamples {
    root -= 1;
  }
  while (root + 1) * (root + 1) <= nsamples {
    root += 1;
  }
  root
}

/// Equal-width histogram. All bins are half-open except the last one, which
/// includes its upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
  edges: Vec<f64>,
  counts: Vec<usize>,
}

impl Histogram {
  /// Bins over the range spanned by `data`.
  pub fn new(data: impl IntoIterator<Item = f64>, nbins: usize) -> Result<Self, SamplingError> {
    let data = data.into_iter().collect_vec();
    if data.iter().any(|x| !x.is_finite()) {
      return Err(SamplingError::NonFiniteData);
    }
    let (lo, hi) = min_max(data.iter().copied()).ok_or(SamplingError::EmptyData)?;
    let range = if lo == hi {
      (lo - 0.5, hi + 0.5)
    } else {
      (lo, hi)
    };
    Self::with_range(data, nbins, range)
  }

  /// Bins over a fixed range. Values outside of it are dropped.
  pub fn with_range(
    data: impl IntoIterator<Item = f64>,
    nbins: usize,
    (lo, hi): (f64, f64),
  ) -> Result<Self, SamplingError> {
    if nbins == 0 {
      return Err(SamplingError::NoBins);
    }
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
      return Err(SamplingError::InvalidRange(lo, hi));
    }

    let edges = (0..=nbins)
      .map(|i| {
        if i == nbins {
          hi
        } else {
          lo + (hi - lo) * i as f64 / nbins as f64
        }
      })
      .collect_vec();

    let mut counts = vec![0; nbins];
    let mut ndropped = 0usize;
    for x in data {
      if !(lo..=hi).contains(&x) {
        ndropped += 1;
        continue;
      }
      let ibin = (((x - lo) / (hi - lo) * nbins as f64) as usize).min(nbins - 1);
      counts[ibin] += 1;
    }
    if ndropped > 0 {
      tracing::debug!("{ndropped} values outside of [{lo}, {hi}] were not binned");
    }
    tracing::debug!("binned {} values into {nbins} bins", counts.iter().sum::<usize>());

    Ok(Self { edges, counts })
  }

  pub fn nbins(&self) -> usize {
    self.counts.len()
  }
  pub fn edges(&self) -> &[f64] {
    &self.edges
  }
  pub fn counts(&self) -> &[usize] {
    &self.counts
  }
  pub fn range(&self) -> (f64, f64) {
    (self.edges[0], self.edges[self.nbins()])
  }
  pub fn bin_width(&self) -> f64 {
    let (lo, hi) = self.range();
    (hi - lo) / self.nbins() as f64
  }
  /// Number of binned values.
  pub fn total(&self) -> usize {
    self.counts.iter().sum()
  }

  pub fn bin_centers(&self) -> Vec<f64> {
    self
      .edges
      .iter()
      .tuple_windows()
      .map(|(a, b)| 0.5 * (a + b))
      .collect()
  }

  /// Probability density per bin. Integrates to 1 unless nothing was binned.
  pub fn densities(&self) -> Vec<f64> {
    let total = self.total();
    if total == 0 {
      return vec![0.0; self.nbins()];
    }
    let norm = total as f64 * self.bin_width();
    self.counts.iter().map(|&c| c as f64 / norm).collect()
  }

  pub fn cumulative_counts(&self) -> Vec<usize> {
    self.counts.iter().copied().cumsum().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn sqrt_rule() {
    assert_eq!(sqrt_bin_count(1_000_000), 1000);
    assert_eq!(sqrt_bin_count(99), 9);
    assert_eq!(sqrt_bin_count(100), 10);
    assert_eq!(sqrt_bin_count(0), 0);
  }

  #[test]
  fn counts_and_edges() {
    let hist = Histogram::new([0.0, 0.1, 0.5, 0.9, 1.0], 2).unwrap();
    assert_eq!(hist.edges(), &[0.0, 0.5, 1.0]);
    // upper edge of the last bin is inclusive
    assert_eq!(hist.counts(), &[2, 3]);
    assert_eq!(hist.cumulative_counts(), vec![2, 5]);
    assert_eq!(hist.bin_centers(), vec![0.25, 0.75]);
    assert_eq!(hist.total(), 5);
  }

  #[test]
  fn densities_integrate_to_one() {
    let data = (0..1000).map(|i| ((i * 37) % 101) as f64 / 7.0);
    let hist = Histogram::new(data, 13).unwrap();
    let integral: f64 = hist.densities().iter().map(|d| d * hist.bin_width()).sum();
    assert_relative_eq!(integral, 1.0, epsilon = 1e-12);
  }

  #[test]
  fn fixed_range_drops_outliers() {
    let hist = Histogram::with_range([-1.0, 0.2, 0.4, 2.0], 4, (0.0, 1.0)).unwrap();
    assert_eq!(hist.total(), 2);
    assert_eq!(hist.range(), (0.0, 1.0));
  }

  #[test]
  fn constant_data_widens_range() {
    let hist = Histogram::new([3.0, 3.0], 1).unwrap();
    assert_eq!(hist.range(), (2.5, 3.5));
    assert_eq!(hist.counts(), &[2]);
  }

  #[test]
  fn invalid_input() {
    assert_eq!(
      Histogram::new(std::iter::empty(), 10).unwrap_err(),
      SamplingError::EmptyData
    );
    assert_eq!(
      Histogram::new([1.0, f64::NAN], 10).unwrap_err(),
      SamplingError::NonFiniteData
    );
    assert_eq!(
      Histogram::new([1.0, 2.0], 0).unwrap_err(),
      SamplingError::NoBins
    );
    assert_eq!(
      Histogram::with_range([1.0], 3, (1.0, 0.0)).unwrap_err(),
      SamplingError::InvalidRange(1.0, 0.0)
    );
  }
}
