//! Rotation systems: the per-vertex (2D) or per-half-edge (3D) cyclic
//! orderings that the combinatorial-map layer turns into `sigma`.

mod rotation2;
mod rotation3;

pub use rotation2::RotationInfo2;
pub use rotation3::RotationInfo3;
