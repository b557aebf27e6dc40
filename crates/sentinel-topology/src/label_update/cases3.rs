//! The 3D catalogue. Only the tetrahedron add/remove cases are specified;
//! every other 3D transition is deliberately routed to `NonAtomic`.

use std::collections::HashMap;

use crate::cmap::CombinatorialMap;
use crate::labelling::CycleLabelling;
use crate::state_change::StateChange;

use super::{LabelUpdate, LabelUpdateKind};

pub(super) fn classify<M: CombinatorialMap>(
    tuple: [u32; 8],
    change: &StateChange<'_, M>,
    _labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    match tuple {
        [0, 0, 0, 0, 0, 0, 0, 0] => LabelUpdate::trivial(),
        [0, 0, 0, 0, 1, 0, 0, 0] => add_tetrahedron(change),
        [0, 0, 0, 0, 0, 1, 0, 0] => LabelUpdate::trivial(),
        _ => LabelUpdate::non_atomic(),
    }
}

/// Mirrors `Add 2-simplex`: the cycle bounded by the new tetrahedron becomes False.
fn add_tetrahedron<M: CombinatorialMap>(change: &StateChange<'_, M>) -> LabelUpdate<M::Dart> {
    let added = change.tetrahedra.added();
    if added.len() != 1 {
        return LabelUpdate::non_atomic();
    }
    let cycles = change.curr().boundary_cycles();
    let Some(idx) = cycles.iter().position(|c| c.nodes() == added[0]) else {
        return LabelUpdate::non_atomic();
    };
    let mut mapping = HashMap::new();
    mapping.insert(cycles[idx].clone(), false);
    LabelUpdate::built(LabelUpdateKind::Add2, mapping, Vec::new(), Vec::new(), Vec::new())
}
