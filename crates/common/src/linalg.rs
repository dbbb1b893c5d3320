pub mod nalgebra;
