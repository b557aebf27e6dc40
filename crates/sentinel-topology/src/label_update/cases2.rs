//! The 2D catalogue: every case handler named in the data model.

use std::collections::HashMap;

use crate::cmap::CombinatorialMap;
use crate::labelling::CycleLabelling;
use crate::state_change::StateChange;

use super::{LabelUpdate, LabelUpdateKind};

pub(super) fn classify<M: CombinatorialMap>(
    tuple: [u32; 6],
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    match tuple {
        [0, 0, 0, 0, 0, 0] => LabelUpdate::trivial(),
        [0, 0, 0, 1, 0, 0] => LabelUpdate::trivial(),
        [1, 0, 0, 0, 2, 1] => {
            let mut update = add_edge(change, labelling);
            // The source material lists this same tuple under a reconnect
            // handler elsewhere; first-match-wins picks Add-edge here (see
            // DESIGN.md), flagged so the caller can surface it.
            update.ambiguous = true;
            update
        }
        [0, 1, 0, 0, 1, 2] => remove_edge(change, labelling),
        [0, 0, 1, 0, 0, 0] => add_triangle(change),
        [1, 0, 1, 0, 2, 1] => add_edge_and_face(change, labelling),
        [0, 1, 0, 1, 1, 2] => remove_edge(change, labelling),
        [1, 1, 2, 2, 2, 2] => flip(change),
        [1, 0, 0, 0, 1, 0] | [0, 1, 0, 0, 0, 1] => LabelUpdate::trivial(),
        [0, 1, 0, 0, 2, 1] | [0, 1, 0, 0, 1, 1] => disconnect(change, labelling),
        [1, 0, 0, 0, 1, 2] | [1, 0, 0, 0, 1, 1] => reconnect(change, labelling),
        _ => LabelUpdate::non_atomic(),
    }
}

fn add_edge<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    if removed.len() != 1 || added.len() != 2 {
        return LabelUpdate::non_atomic();
    }
    let label = labelling.get(&removed[0]).unwrap_or(true);
    let mut mapping = HashMap::new();
    mapping.insert(added[0].clone(), label);
    mapping.insert(added[1].clone(), label);
    LabelUpdate::built(LabelUpdateKind::Add1, mapping, added.to_vec(), removed.to_vec(), removed.to_vec())
}

fn remove_edge<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    if removed.len() != 2 || added.len() != 1 {
        return LabelUpdate::non_atomic();
    }
    let l1 = labelling.get(&removed[0]).unwrap_or(true);
    let l2 = labelling.get(&removed[1]).unwrap_or(true);
    let mut mapping = HashMap::new();
    mapping.insert(added[0].clone(), l1 || l2);
    LabelUpdate::built(LabelUpdateKind::Remove1, mapping, added.to_vec(), removed.to_vec(), removed.to_vec())
}

fn add_triangle<M: CombinatorialMap>(change: &StateChange<'_, M>) -> LabelUpdate<M::Dart> {
    let added_tris = change.triangles.added();
    if added_tris.len() != 1 {
        return LabelUpdate::non_atomic();
    }
    let cycles = change.curr().boundary_cycles();
    let Some(idx) = cycles.iter().position(|c| c.nodes() == added_tris[0]) else {
        return LabelUpdate::non_atomic();
    };
    let mut mapping = HashMap::new();
    mapping.insert(cycles[idx].clone(), false);
    LabelUpdate::built(LabelUpdateKind::Add2, mapping, Vec::new(), Vec::new(), Vec::new())
}

fn add_edge_and_face<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    let added_tris = change.triangles.added();
    let added_edges = change.edges.added();
    if removed.len() != 1 || added.len() != 2 || added_tris.len() != 1 || added_edges.len() != 1 {
        return LabelUpdate::non_atomic();
    }
    if !added_edges[0].is_subface_of(&added_tris[0]) {
        return LabelUpdate::non_atomic();
    }
    let label = labelling.get(&removed[0]).unwrap_or(true);
    let mut mapping = HashMap::new();
    for c in added {
        let value = if c.nodes() == added_tris[0] { false } else { label };
        mapping.insert(c.clone(), value);
    }
    LabelUpdate::built(LabelUpdateKind::AddPair, mapping, added.to_vec(), removed.to_vec(), removed.to_vec())
}

fn flip<M: CombinatorialMap>(change: &StateChange<'_, M>) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    let removed_edges = change.edges.removed();
    let added_edges = change.edges.added();
    let removed_tris = change.triangles.removed();
    let added_tris = change.triangles.added();
    if removed.len() != 2
        || added.len() != 2
        || removed_edges.len() != 1
        || added_edges.len() != 1
        || removed_tris.len() != 2
        || added_tris.len() != 2
    {
        return LabelUpdate::non_atomic();
    }
    let shared_removed = removed_tris.iter().all(|t| removed_edges[0].is_subface_of(t));
    let shared_added = added_tris.iter().all(|t| added_edges[0].is_subface_of(t));
    if !shared_removed || !shared_added {
        return LabelUpdate::non_atomic();
    }
    let mut mapping = HashMap::new();
    for c in added {
        mapping.insert(c.clone(), false);
    }
    LabelUpdate::built(LabelUpdateKind::Flip, mapping, added.to_vec(), removed.to_vec(), Vec::new())
}

/// Forgetful disconnect: a fence fracture always removes exactly one old
/// cycle (`removed`, length 1) and produces one or two new cycles (`added`),
/// of which one still reaches the fence and absorbs labels. Which of `added`
/// is the enclosing one is found by connectivity in the new state, not by
/// position; every other currently-labelled cycle that the same fracture
/// knocked loose (not just the ones the diff names) is rescanned for and
/// folded in by OR, then forgotten along with the old cycle.
fn disconnect<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    if removed.len() != 1 || added.is_empty() || added.len() > 2 {
        return LabelUpdate::non_atomic();
    }
    let old_cycle = &removed[0];
    if !labelling.contains(old_cycle) {
        return LabelUpdate::built(LabelUpdateKind::Disconnect, HashMap::new(), Vec::new(), Vec::new(), Vec::new());
    }

    let curr = change.curr();
    let enclosing = if !curr.is_connected_cycle_darts(&added[0]) && added.len() > 1 {
        &added[1]
    } else {
        &added[0]
    };

    let mut disconnected = Vec::new();
    let mut disconnected_label = false;
    for (cycle, &label) in labelling.iter() {
        if cycle != old_cycle && !curr.is_connected_cycle_darts(cycle) {
            disconnected_label = disconnected_label || label;
            disconnected.push(cycle.clone());
        }
    }

    let old_label = labelling.get(old_cycle).unwrap_or(true);
    let mut mapping = HashMap::new();
    mapping.insert(enclosing.clone(), disconnected_label || old_label);

    let mut reads = disconnected.clone();
    reads.push(old_cycle.clone());
    let mut cycles_removed = disconnected;
    cycles_removed.push(old_cycle.clone());

    LabelUpdate::built(
        LabelUpdateKind::Disconnect,
        mapping,
        vec![enclosing.clone()],
        cycles_removed,
        reads,
    )
}

/// Forgetful reconnect: the mirror image of `disconnect`. One or two old
/// cycles (`removed`) merge back into the single new one (`added`, length
/// 1); the surviving enclosing cycle is found by which of `removed` is still
/// labelled, with a fallback to the other candidate. Every connected cycle
/// the labelling had forgotten during an earlier disconnect is re-seeded
/// with the enclosing cycle's label, then every cycle bounded by a
/// top-dimensional simplex is forced clear regardless of that inherited
/// label.
fn reconnect<M: CombinatorialMap>(
    change: &StateChange<'_, M>,
    labelling: &CycleLabelling<M::Dart>,
) -> LabelUpdate<M::Dart> {
    let removed = change.cycles.removed();
    let added = change.cycles.added();
    if added.len() != 1 || removed.is_empty() || removed.len() > 2 {
        return LabelUpdate::non_atomic();
    }
    let enclosing = if !labelling.contains(&removed[0]) && removed.len() > 1 {
        &removed[1]
    } else {
        &removed[0]
    };
    if !labelling.contains(enclosing) {
        return LabelUpdate::built(LabelUpdateKind::Reconnect, HashMap::new(), Vec::new(), Vec::new(), Vec::new());
    }
    let label = labelling.get(enclosing).unwrap_or(true);

    let curr = change.curr();
    let alpha = curr.map().cycle(curr.alpha_cycle());
    let mut mapping = HashMap::new();
    let mut cycles_added = added.to_vec();
    mapping.insert(added[0].clone(), label);

    for cycle in curr.boundary_cycles() {
        if cycle != &added[0]
            && cycle != alpha
            && !labelling.contains(cycle)
            && curr.is_connected_cycle_darts(cycle)
        {
            cycles_added.push(cycle.clone());
            mapping.insert(cycle.clone(), label);
        }
    }

    let top_simplices = curr.alpha_complex().simplices(curr.ambient_dim());
    let cycles = curr.boundary_cycles();
    for top in top_simplices {
        if let Some(idx) = cycles.iter().position(|c| c.nodes() == *top) {
            let cycle = &cycles[idx];
            if labelling.contains(cycle) || mapping.contains_key(cycle) {
                mapping.insert(cycle.clone(), false);
            }
        }
    }

    LabelUpdate::built(
        LabelUpdateKind::Reconnect,
        mapping,
        cycles_added,
        vec![enclosing.clone()],
        vec![enclosing.clone()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::Vector2;

    use crate::alpha::AlphaComplex;
    use crate::cmap::CombinatorialMap2;
    use crate::simplex::{OrientedEdge, Simplex};
    use crate::state_change::Case;
    use crate::topology::Topology;

    fn build(
        points: &HashMap<usize, Vector2<f64>>,
        nodes: Vec<usize>,
        edges: Vec<Simplex>,
    ) -> Topology<CombinatorialMap2> {
        let complex = AlphaComplex::from_simplices(nodes, edges.clone());
        let map = CombinatorialMap2::build(points, &edges);
        Topology::new(complex, map, 2)
    }

    fn case_tuple(change: &StateChange<'_, CombinatorialMap2>) -> [u32; 6] {
        match change.case() {
            Case::D2(tuple) => tuple,
            Case::D3(_) => unreachable!("2D fixture"),
        }
    }

    // A square fence (0-1-2-3) with a pendant bridge out of vertex 0 to a
    // small triangle (4-5-6). With the bridge present, the square's hole and
    // the triangle's hole are one boundary cycle (the bridge does not split
    // the plane); removing the bridge splits it into two: the square's hole
    // (still fence-connected) and the triangle's hole (now cut loose).
    fn lollipop_points() -> HashMap<usize, Vector2<f64>> {
        [
            (0usize, Vector2::new(0.0, 0.0)),
            (1, Vector2::new(4.0, 0.0)),
            (2, Vector2::new(4.0, 4.0)),
            (3, Vector2::new(0.0, 4.0)),
            (4, Vector2::new(-2.0, 0.0)),
            (5, Vector2::new(-3.0, 1.0)),
            (6, Vector2::new(-3.0, -1.0)),
        ]
        .into_iter()
        .collect()
    }

    fn lollipop_edges_with_bridge() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([2, 3]),
            Simplex::new([3, 0]),
            Simplex::new([0, 4]),
            Simplex::new([4, 5]),
            Simplex::new([5, 6]),
            Simplex::new([6, 4]),
        ]
    }

    fn lollipop_edges_without_bridge() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([2, 3]),
            Simplex::new([3, 0]),
            Simplex::new([4, 5]),
            Simplex::new([5, 6]),
            Simplex::new([6, 4]),
        ]
    }

    // The same square fence with a bare pendant point (vertex 4, degree 1,
    // no triangle at the far end). Removing the bridge only isolates the
    // point; no second hole appears.
    fn pendant_points() -> HashMap<usize, Vector2<f64>> {
        [
            (0usize, Vector2::new(0.0, 0.0)),
            (1, Vector2::new(4.0, 0.0)),
            (2, Vector2::new(4.0, 4.0)),
            (3, Vector2::new(0.0, 4.0)),
            (4, Vector2::new(-2.0, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    fn pendant_edges_with_bridge() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([2, 3]),
            Simplex::new([3, 0]),
            Simplex::new([0, 4]),
        ]
    }

    fn pendant_edges_without_bridge() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([2, 3]),
            Simplex::new([3, 0]),
        ]
    }

    #[test]
    fn disconnect_splits_into_two_new_cycles() {
        let points = lollipop_points();
        let nodes: Vec<usize> = points.keys().copied().collect();
        let prev = build(&points, nodes.clone(), lollipop_edges_with_bridge());
        let curr = build(&points, nodes, lollipop_edges_without_bridge());

        let change = StateChange::diff(&prev, &curr);
        assert_eq!(change.case(), Case::D2([0, 1, 0, 0, 2, 1]));

        let labelling = CycleLabelling::from_topology(&prev);
        assert_eq!(labelling.len(), 1);

        let update = classify(case_tuple(&change), &change, &labelling);
        assert_eq!(update.kind(), LabelUpdateKind::Disconnect);
        assert!(update.is_atomic());
        assert_eq!(update.cycles_removed().len(), 1);
        assert_eq!(update.cycles_added().len(), 1);
        assert_eq!(update.mapping().values().copied().next(), Some(true));

        let enclosing_id = curr.map().get_cycle(OrientedEdge::new(0, 1));
        let enclosing = curr.map().cycle(enclosing_id);
        assert!(update.cycles_added().contains(enclosing));
    }

    #[test]
    fn disconnect_handles_a_single_new_cycle_candidate() {
        let points = pendant_points();
        let nodes: Vec<usize> = points.keys().copied().collect();
        let prev = build(&points, nodes.clone(), pendant_edges_with_bridge());
        let curr = build(&points, nodes, pendant_edges_without_bridge());

        let change = StateChange::diff(&prev, &curr);
        assert_eq!(change.case(), Case::D2([0, 1, 0, 0, 1, 1]));

        let labelling = CycleLabelling::from_topology(&prev);
        assert_eq!(labelling.len(), 1);

        let update = classify(case_tuple(&change), &change, &labelling);
        assert_eq!(update.kind(), LabelUpdateKind::Disconnect);
        assert!(update.is_atomic());
        assert_eq!(update.cycles_added().len(), 1);
        assert_eq!(update.mapping().values().copied().next(), Some(true));
    }

    #[test]
    fn reconnect_merges_two_old_cycles() {
        let points = lollipop_points();
        let nodes: Vec<usize> = points.keys().copied().collect();
        let prev = build(&points, nodes.clone(), lollipop_edges_without_bridge());
        let curr = build(&points, nodes, lollipop_edges_with_bridge());

        let change = StateChange::diff(&prev, &curr);
        assert_eq!(change.case(), Case::D2([1, 0, 0, 0, 1, 2]));

        let labelling = CycleLabelling::from_topology(&prev);
        assert_eq!(labelling.len(), 1);

        let update = classify(case_tuple(&change), &change, &labelling);
        assert_eq!(update.kind(), LabelUpdateKind::Reconnect);
        assert!(update.is_atomic());
        assert_eq!(update.cycles_removed().len(), 1);
        assert_eq!(update.cycles_added().len(), 1);

        let merged_id = curr.map().get_cycle(OrientedEdge::new(0, 1));
        let merged = curr.map().cycle(merged_id);
        assert_eq!(update.mapping().get(merged).copied(), Some(true));
        assert!(update.cycles_added().contains(merged));
    }

    #[test]
    fn reconnect_handles_a_single_old_cycle_candidate() {
        let points = pendant_points();
        let nodes: Vec<usize> = points.keys().copied().collect();
        let prev = build(&points, nodes.clone(), pendant_edges_without_bridge());
        let curr = build(&points, nodes, pendant_edges_with_bridge());

        let change = StateChange::diff(&prev, &curr);
        assert_eq!(change.case(), Case::D2([1, 0, 0, 0, 1, 1]));

        let labelling = CycleLabelling::from_topology(&prev);
        assert_eq!(labelling.len(), 1);

        let update = classify(case_tuple(&change), &change, &labelling);
        assert_eq!(update.kind(), LabelUpdateKind::Reconnect);
        assert!(update.is_atomic());
        assert_eq!(update.cycles_removed().len(), 1);
        assert_eq!(update.mapping().values().copied().next(), Some(true));
    }
}
