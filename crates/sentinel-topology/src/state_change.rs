//! `StateChange`: the combinatorial diff between two successive topologies,
//! and the case tuple that classifies it against the closed catalogue.

use std::collections::HashSet;
use std::hash::Hash;

use crate::cmap::{BoundaryCycle, CombinatorialMap};
use crate::simplex::Simplex;
use crate::topology::Topology;

/// Added/removed elements of a set between two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetDifference<T> {
    added: Vec<T>,
    removed: Vec<T>,
}

impl<T: Clone + Eq + Hash> SetDifference<T> {
    pub fn compute(old: &HashSet<T>, new: &HashSet<T>) -> Self {
        Self {
            added: new.difference(old).cloned().collect(),
            removed: old.difference(new).cloned().collect(),
        }
    }

    pub fn added(&self) -> &[T] {
        &self.added
    }

    pub fn removed(&self) -> &[T] {
        &self.removed
    }
}

/// The case tuple classifying a `StateChange` against the closed catalogue.
///
/// `D2` is `(e+, e-, s+, s-, c+, c-)`: edge and 2-simplex deltas, then
/// boundary-cycle deltas. `D3` prepends a triangle (2-simplex) column and
/// lets `s` range over tetrahedra: `(t+, t-, e+, e-, s+, s-, c+, c-)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    D2([u32; 6]),
    D3([u32; 8]),
}

/// The combinatorial diff between two topologies of the same dimension.
pub struct StateChange<'a, M: CombinatorialMap> {
    pub edges: SetDifference<Simplex>,
    pub triangles: SetDifference<Simplex>,
    pub tetrahedra: SetDifference<Simplex>,
    pub cycles: SetDifference<BoundaryCycle<M::Dart>>,
    prev: &'a Topology<M>,
    curr: &'a Topology<M>,
}

impl<'a, M: CombinatorialMap> StateChange<'a, M> {
    pub fn diff(prev: &'a Topology<M>, curr: &'a Topology<M>) -> Self {
        let edges = SetDifference::compute(prev.simplices(1), curr.simplices(1));
        let triangles = SetDifference::compute(prev.simplices(2), curr.simplices(2));
        let tetrahedra = SetDifference::compute(prev.simplices(3), curr.simplices(3));

        let prev_cycles: HashSet<BoundaryCycle<M::Dart>> =
            prev.boundary_cycles().iter().cloned().collect();
        let curr_cycles: HashSet<BoundaryCycle<M::Dart>> =
            curr.boundary_cycles().iter().cloned().collect();
        let cycles = SetDifference::compute(&prev_cycles, &curr_cycles);

        Self {
            edges,
            triangles,
            tetrahedra,
            cycles,
            prev,
            curr,
        }
    }

    pub fn prev(&self) -> &Topology<M> {
        self.prev
    }

    pub fn curr(&self) -> &Topology<M> {
        self.curr
    }

    pub fn case(&self) -> Case {
        let dim = self.prev.ambient_dim().max(self.curr.ambient_dim());
        if dim >= 3 {
            Case::D3([
                self.triangles.added().len() as u32,
                self.triangles.removed().len() as u32,
                self.edges.added().len() as u32,
                self.edges.removed().len() as u32,
                self.tetrahedra.added().len() as u32,
                self.tetrahedra.removed().len() as u32,
                self.cycles.added().len() as u32,
                self.cycles.removed().len() as u32,
            ])
        } else {
            Case::D2([
                self.edges.added().len() as u32,
                self.edges.removed().len() as u32,
                self.triangles.added().len() as u32,
                self.triangles.removed().len() as u32,
                self.cycles.added().len() as u32,
                self.cycles.removed().len() as u32,
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha::DelaunayAlphaKernel2;
    use nalgebra::Vector2;
    use std::collections::HashMap;

    fn hex_points() -> HashMap<usize, Vector2<f64>> {
        [
            (0usize, Vector2::new(1.5, 0.5)),
            (1, Vector2::new(1.0, 1.0)),
            (2, Vector2::new(0.5, 1.6)),
            (3, Vector2::new(0.0, 1.0)),
            (4, Vector2::new(0.0, 0.0)),
            (5, Vector2::new(1.0, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn no_op_diff_against_self_is_all_zero() {
        let pts = hex_points();
        let kernel = DelaunayAlphaKernel2;
        let topo = Topology::build_2d(&pts, 0.5, &kernel).unwrap();
        let change = StateChange::diff(&topo, &topo);
        assert_eq!(change.case(), Case::D2([0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn moving_a_point_to_add_a_triangle_is_case_add_2_simplex() {
        let mut pts = hex_points();
        let kernel = DelaunayAlphaKernel2;
        let before = Topology::build_2d(&pts, 0.5, &kernel).unwrap();
        pts.insert(2, Vector2::new(0.5, 1.5));
        let after = Topology::build_2d(&pts, 0.5, &kernel).unwrap();
        let change = StateChange::diff(&before, &after);
        assert_eq!(change.triangles.added().len(), 1);
        assert_eq!(change.triangles.removed().len(), 0);
    }
}
