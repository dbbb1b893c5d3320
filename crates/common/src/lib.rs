extern crate nalgebra as na;

pub mod affine;
pub mod linalg;
pub mod util;
