use crate::SamplingError;

use rand::Rng;
use rand_distr::Distribution;

/// Dirichlet distribution over `k >= 2` categories.
#[derive(Debug, Clone)]
pub struct Dirichlet {
  alphas: Vec<f64>,
  distr: rand_distr::Dirichlet<f64>,
}

impl Dirichlet {
  pub const MIN_CATEGORIES: usize = 2;

  pub fn new(alphas: impl Into<Vec<f64>>) -> Result<Self, SamplingError> {
    let alphas = alphas.into();
    if alphas.len() < Self::MIN_CATEGORIES {
      return Err(SamplingError::TooFewCategories {
        min: Self::MIN_CATEGORIES,
        got: alphas.len(),
      });
    }
    if let Some((index, &value)) = alphas
      .iter()
      .enumerate()
      .find(|(_, &a)| !(a.is_finite() && a > 0.0))
    {
      return Err(SamplingError::InvalidConcentration { index, value });
    }
    let distr = rand_distr::Dirichlet::new(&alphas)?;
    Ok(Self { alphas, distr })
  }

  pub fn alphas(&self) -> &[f64] {
    &self.alphas
  }
  pub fn ncategories(&self) -> usize {
    self.alphas.len()
  }
  pub fn concentration(&self) -> f64 {
    self.alphas.iter().sum()
  }

  pub fn mean(&self) -> na::DVector<f64> {
    let total = self.concentration();
    na::DVector::from_iterator(self.ncategories(), self.alphas.iter().map(|a| a / total))
  }

  /// Merges categories by summing their concentrations.
  ///
  /// `groups` must partition the categories. A sample of the result is distributed
  /// like the group-wise sums of a sample of `self`.
  pub fn aggregate(&self, groups: &[&[usize]]) -> Result<Self, SamplingError> {
    let mut used = vec![false; self.ncategories()];
    let mut alphas = Vec::with_capacity(groups.len());
    for group in groups {
      let mut alpha = 0.0;
      for &icategory in group.iter() {
        match used.get_mut(icategory) {
          Some(flag) if !*flag => *flag = true,
          _ => return Err(SamplingError::InvalidGrouping(icategory)),
        }
        alpha += self.alphas[icategory];
      }
      alphas.push(alpha);
    }
    if let Some(missing) = used.iter().position(|&u| !u) {
      return Err(SamplingError::InvalidGrouping(missing));
    }
    Self::new(alphas)
  }

  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> na::DVector<f64> {
    na::DVector::from_vec(self.distr.sample(rng))
  }

  /// `k × n` matrix of `n` independent samples.
  pub fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, nsamples: usize) -> na::DMatrix<f64> {
    tracing::debug!(
      "drawing {nsamples} Dirichlet samples with alphas {:?}",
      self.alphas
    );
    let mut samples = na::DMatrix::zeros(self.ncategories(), nsamples);
    for mut column in samples.column_iter_mut() {
      let sample: Vec<f64> = self.distr.sample(rng);
      column.copy_from_slice(&sample);
    }
    samples
  }
}
