//! 3D combinatorial map: darts are oriented triangles (2-simplices).

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::ids::CycleId;
use crate::rotation::RotationInfo3;
use crate::simplex::{OrientedTriangle, Simplex};

use super::{enumerate_phi_orbits, BoundaryCycle, CombinatorialMap};

#[derive(Clone, Debug)]
pub struct CombinatorialMap3 {
    darts: Vec<OrientedTriangle>,
    rotation: RotationInfo3,
    cycles: Vec<BoundaryCycle<OrientedTriangle>>,
    dart_cycle: HashMap<OrientedTriangle, CycleId>,
}

impl CombinatorialMap3 {
    pub fn build(points: &HashMap<usize, Vector3<f64>>, triangles: &[Simplex]) -> Self {
        let rotation = RotationInfo3::build(points, triangles);
        let mut darts = Vec::with_capacity(triangles.len() * 2);
        for tri in triangles {
            let v: Vec<usize> = tri.nodes().iter().copied().collect();
            darts.push(OrientedTriangle::new(v[0], v[1], v[2]));
            darts.push(OrientedTriangle::new(v[0], v[2], v[1]));
        }
        let orbits = enumerate_phi_orbits(&darts, |d| {
            let reversed = d.reverse();
            rotation.next(reversed.leading_half_edge(), reversed)
        });
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

impl CombinatorialMap for CombinatorialMap3 {
    type Dart = OrientedTriangle;

    fn alpha(&self, d: Self::Dart) -> Self::Dart {
        d.reverse()
    }

    fn sigma(&self, d: Self::Dart) -> Self::Dart {
        self.rotation.next(d.leading_half_edge(), d)
    }

    fn alpha_dart(&self) -> Self::Dart {
        OrientedTriangle::new(0, 1, 2)
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

    /// Two tetrahedra glued on the shared face (0,1,2): apex 3 below, apex 4 above.
    fn bipyramid_points() -> HashMap<usize, Vector3<f64>> {
        [
            (0usize, Vector3::new(0.0, 0.0, 0.0)),
            (1, Vector3::new(1.0, 0.0, 0.0)),
            (2, Vector3::new(0.0, 1.0, 0.0)),
            (3, Vector3::new(0.3, 0.3, -1.0)),
            (4, Vector3::new(0.3, 0.3, 1.0)),
        ]
        .into_iter()
        .collect()
    }

    fn bipyramid_faces() -> Vec<Simplex> {
        vec![
            Simplex::new([0, 1, 2]),
            Simplex::new([0, 1, 3]),
            Simplex::new([1, 2, 3]),
            Simplex::new([2, 0, 3]),
            Simplex::new([0, 1, 4]),
            Simplex::new([1, 2, 4]),
            Simplex::new([2, 0, 4]),
        ]
    }

    #[test]
    fn alpha_is_a_fixed_point_free_involution() {
        let pts = bipyramid_points();
        let faces = bipyramid_faces();
        let map = CombinatorialMap3::build(&pts, &faces);
        for &d in map.all_darts() {
            assert_eq!(map.alpha(map.alpha(d)), d);
            assert_ne!(map.alpha(d), d);
        }
    }

    #[test]
    fn phi_orbits_partition_the_dart_set() {
        let pts = bipyramid_points();
        let faces = bipyramid_faces();
        let map = CombinatorialMap3::build(&pts, &faces);
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
        let pts = bipyramid_points();
        let faces = bipyramid_faces();
        let map = CombinatorialMap3::build(&pts, &faces);
        for &d in map.all_darts() {
            let id = map.get_cycle(d);
            assert!(map.cycle(id).darts().contains(&d));
        }
    }
}
