//! Topological intruder detection over a moving sensor point cloud.
//!
//! Turns a point cloud plus sensing radius into a stream of cycle-label
//! updates: `points -> AlphaComplex -> RotationInfo -> CombinatorialMap ->
//! Topology -> StateChange -> LabelUpdate -> CycleLabelling`. Single-threaded
//! and synchronous; never logs (see `error`); motion models, domain geometry,
//! and I/O live in collaborator crates.

pub mod alpha;
pub mod cmap;
pub mod error;
pub mod events;
pub mod geometry;
pub mod ids;
pub mod label_update;
pub mod labelling;
pub mod rotation;
pub mod simplex;
pub mod simulation;
pub mod state_change;
pub mod topology;

#[cfg(test)]
mod proptests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::alpha::{AlphaComplex, AlphaKernel2, DelaunayAlphaKernel2, KernelOutput};
    pub use crate::cmap::{BoundaryCycle, CombinatorialMap, CombinatorialMap2, CombinatorialMap3};
    pub use crate::error::TopologyError;
    pub use crate::events::{EventKind, RunEvent, RunOutcome};
    pub use crate::ids::{CycleId, DartId};
    pub use crate::label_update::{LabelUpdate, LabelUpdateKind};
    pub use crate::labelling::CycleLabelling;
    pub use crate::simplex::{OrientedEdge, OrientedTriangle, Simplex};
    pub use crate::simulation::{CommittedStep, MotionModel, Simulation};
    pub use crate::state_change::{Case, SetDifference, StateChange};
    pub use crate::topology::Topology;
}
