//! 2D combinatorial map: darts are oriented edges.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::ids::CycleId;
use crate::rotation::RotationInfo2;
use crate::simplex::{OrientedEdge, Simplex};

use super::{enumerate_phi_orbits, BoundaryCycle, CombinatorialMap};

#[derive(Clone, Debug)]
pub struct CombinatorialMap2 {
    darts: Vec<OrientedEdge>,
    rotation: RotationInfo2,
    cycles: Vec<BoundaryCycle<OrientedEdge>>,
    dart_cycle: HashMap<OrientedEdge, CycleId>,
}

impl CombinatorialMap2 {
    pub fn build(points: &HashMap<usize, Vector2<f64>>, edges: &[Simplex]) -> Self {
        let rotation = RotationInfo2::build(points, edges);
        let mut darts = Vec::with_capacity(edges.len() * 2);
        for e in edges {
            let v: Vec<usize> = e.nodes().iter().copied().collect();
            darts.push(OrientedEdge::new(v[0], v[1]));
            darts.push(OrientedEdge::new(v[1], v[0]));
        }
        let orbits = enumerate_phi_orbits(&darts, |d| rotation.next(d.reverse()));
        let cycles: Vec<_> = orbits.into_iter().map(BoundaryCycle::new).collect();
        let mut dart_cycle = HashMap::with_capacity(darts.len());
        for (i, c) in cycles.iter().enumerate() {
            for &d in c.darts() {
                dart_cycle.insert(d, CycleId(i));
            }
        }
        Self {
            darts,
            rotation,
            cycles,
            dart_cycle,
        }
    }
}

impl CombinatorialMap for CombinatorialMap2 {
    type Dart = OrientedEdge;

    fn alpha(&self, d: Self::Dart) -> Self::Dart {
        d.reverse()
    }

    fn sigma(&self, d: Self::Dart) -> Self::Dart {
        self.rotation.next(d)
    }

    fn alpha_dart(&self) -> Self::Dart {
        OrientedEdge::new(1, 0)
    }

    fn all_darts(&self) -> &[Self::Dart] {
        &self.darts
    }

    fn boundary_cycles(&self) -> &[BoundaryCycle<Self::Dart>] {
        &self.cycles
    }

    fn get_cycle(&self, d: Self::Dart) -> CycleId {
        *self
            .dart_cycle
            .get(&d)
            .expect("every dart must lie in exactly one phi-orbit")
    }

    fn cycle(&self, id: CycleId) -> &BoundaryCycle<Self::Dart> {
        &self.cycles[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_points() -> HashMap<usize, Vector2<f64>> {
        [
            (0usize, Vector2::new(0.0, 0.0)),
            (1, Vector2::new(1.0, 0.0)),
            (2, Vector2::new(1.0, 1.0)),
            (3, Vector2::new(0.0, 1.0)),
        ]
        .into_iter()
        .collect()
    }

    fn square_edges() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1]),
            Simplex::new([1, 2]),
            Simplex::new([2, 3]),
            Simplex::new([3, 0]),
        ]
    }

    #[test]
    fn alpha_is_a_fixed_point_free_involution() {
        let pts = square_points();
        let edges = square_edges();
        let map = CombinatorialMap2::build(&pts, &edges);
        for &d in map.all_darts() {
            assert_eq!(map.alpha(map.alpha(d)), d);
            assert_ne!(map.alpha(d), d);
        }
    }

    #[test]
    fn square_boundary_has_two_cycles_inside_and_outside() {
        let pts = square_points();
        let edges = square_edges();
        let map = CombinatorialMap2::build(&pts, &edges);
        // A bare 4-cycle with no diagonal has exactly two boundary cycles:
        // the inside face and the outer (unbounded) face.
        assert_eq!(map.boundary_cycles().len(), 2);
        for cycle in map.boundary_cycles() {
            assert_eq!(cycle.len(), 4);
        }
    }

    #[test]
    fn phi_orbits_partition_the_dart_set() {
        let pts = square_points();
        let edges = square_edges();
        let map = CombinatorialMap2::build(&pts, &edges);
        let total: usize = map.boundary_cycles().iter().map(|c| c.len()).sum();
        assert_eq!(total, map.all_darts().len());
        let mut all = std::collections::HashSet::new();
        for cycle in map.boundary_cycles() {
            for &d in cycle.darts() {
                assert!(all.insert(d), "dart {:?} appeared in two cycles", d);
            }
        }
    }

    #[test]
    fn get_cycle_is_consistent_with_boundary_cycles() {
        let pts = square_points();
        let edges = square_edges();
        let map = CombinatorialMap2::build(&pts, &edges);
        for &d in map.all_darts() {
            let id = map.get_cycle(d);
            assert!(map.cycle(id).darts().contains(&d));
        }
    }
}
