pub trait CumsumExt {
  fn cumsum(self) -> impl Iterator<Item = usize>;
}
impl<I: IntoIterator<Item = usize>> CumsumExt for I {
  fn cumsum(self) -> impl Iterator<Item = usize> {
    self.into_iter().scan(0, |acc, x| {
      *acc += x;
      Some(*acc)
    })
  }
}

/// Smallest and largest element, `None` on empty input.
pub fn min_max<I: IntoIterator<Item = f64>>(iter: I) -> Option<(f64, f64)> {
  iter.into_iter().fold(None, |acc, x| match acc {
    None => Some((x, x)),
    Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
  })
}
