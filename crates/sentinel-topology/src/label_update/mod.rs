//! The `LabelUpdate` family: one constructor per atomic transition in the
//! closed catalogue, dispatched from a `StateChange`'s case tuple.

mod cases2;
mod cases3;

use std::collections::HashMap;
use std::hash::Hash;

use crate::cmap::{BoundaryCycle, CombinatorialMap};
use crate::labelling::CycleLabelling;
use crate::simplex::DartVertices;
use crate::state_change::{Case, StateChange};

/// Which catalogue entry a `LabelUpdate` was built from. Kept alongside the
/// uniform `mapping`/`cycles_added`/`cycles_removed` triple so a caller (or a
/// test) can tell two differently-shaped atomic transitions apart without
/// reverse-engineering it from the sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelUpdateKind {
    Trivial,
    Add1,
    Remove1,
    Add2,
    Remove2,
    AddPair,
    RemovePair,
    Flip,
    Disconnect,
    Reconnect,
    NonAtomic,
}

/// The label delta for one atomic topological transition.
pub struct LabelUpdate<D: Ord + Copy + Eq + Hash + DartVertices> {
    kind: LabelUpdateKind,
    atomic: bool,
    mapping: HashMap<BoundaryCycle<D>, bool>,
    cycles_added: Vec<BoundaryCycle<D>>,
    cycles_removed: Vec<BoundaryCycle<D>>,
    /// Cycles whose pre-existing label value this update reads (via
    /// `CycleLabelling::get`) to compute `mapping`, distinct from the cycles
    /// it merely writes to.
    reads: Vec<BoundaryCycle<D>>,
    /// Set when the case tuple is the one known ambiguous entry in the
    /// catalogue, overlapping between the add-edge and reconnect handlers.
    pub ambiguous: bool,
}

impl<D: Ord + Copy + Eq + Hash + DartVertices> LabelUpdate<D> {
    pub fn kind(&self) -> LabelUpdateKind {
        self.kind
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    pub fn mapping(&self) -> &HashMap<BoundaryCycle<D>, bool> {
        &self.mapping
    }

    pub fn cycles_added(&self) -> &[BoundaryCycle<D>] {
        &self.cycles_added
    }

    pub fn cycles_removed(&self) -> &[BoundaryCycle<D>] {
        &self.cycles_removed
    }

    /// Every cycle this update reads from must already be labelled; every
    /// cycle it writes to must be either newly added here or already present.
    pub fn is_valid(&self, labelling: &CycleLabelling<D>) -> bool {
        if !self.atomic {
            return false;
        }
        if !self.reads.iter().all(|c| labelling.contains(c)) {
            return false;
        }
        self.mapping
            .keys()
            .all(|c| self.cycles_added.contains(c) || labelling.contains(c))
    }

    fn trivial() -> Self {
        Self {
            kind: LabelUpdateKind::Trivial,
            atomic: true,
            mapping: HashMap::new(),
            cycles_added: Vec::new(),
            cycles_removed: Vec::new(),
            reads: Vec::new(),
            ambiguous: false,
        }
    }

    fn non_atomic() -> Self {
        Self {
            kind: LabelUpdateKind::NonAtomic,
            atomic: false,
            mapping: HashMap::new(),
            cycles_added: Vec::new(),
            cycles_removed: Vec::new(),
            reads: Vec::new(),
            ambiguous: false,
        }
    }

    fn built(
        kind: LabelUpdateKind,
        mapping: HashMap<BoundaryCycle<D>, bool>,
        cycles_added: Vec<BoundaryCycle<D>>,
        cycles_removed: Vec<BoundaryCycle<D>>,
        reads: Vec<BoundaryCycle<D>>,
    ) -> Self {
        Self {
            kind,
            atomic: true,
            mapping,
            cycles_added,
            cycles_removed,
            reads,
            ambiguous: false,
        }
    }
}

/// Classify a `StateChange` into the atomic `LabelUpdate` it corresponds to,
/// or a `NonAtomic` update if it falls outside the closed catalogue.
pub fn classify<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    match change.case() {
        Case::D2(tuple) => cases2::classify(tuple, change, labelling),
        Case::D3(tuple) => cases3::classify(tuple, change, labelling),
    }
}
