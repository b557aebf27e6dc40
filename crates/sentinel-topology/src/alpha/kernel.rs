//! Thin adaptor trait over an external Delaunay/alpha library.
//!
//! The core never computes filtration values itself outside of this trait's
//! implementors — everything above `AlphaComplex` treats the filtered
//! simplicial complex as a black box.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::error::TopologyError;
use crate::simplex::Simplex;

/// One simplex the kernel is willing to vouch for, paired with the squared
/// radius at which it enters the filtration.
pub struct KernelOutput {
    pub simplices: Vec<(Simplex, f64)>,
}

/// Builds a 2D filtered complex from a point set. `radius` is not passed in —
/// the kernel reports filtration values for every candidate simplex; the
/// caller truncates at `radius^2` (see [`crate::alpha::AlphaComplex::build_2d`]).
pub trait AlphaKernel2 {
    fn build(&self, points: &HashMap<usize, Vector2<f64>>) -> Result<KernelOutput, TopologyError>;
}
