//! Arena-index handles.
//!
//! Darts and boundary cycles are kept in flat tables; these newtypes index
//! them instead of letting the rest of the crate pass owning references
//! around.

/// Index into a combinatorial map's dart arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DartId(pub usize);

/// Index into a combinatorial map's boundary-cycle arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleId(pub usize);
