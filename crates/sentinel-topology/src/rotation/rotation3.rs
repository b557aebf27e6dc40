//! 3D rotation system: per-half-edge circular adjacency of incident triangles,
//! ordered by dihedral angle.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::geometry::{project_perp, signed_angle_around_axis};
use crate::simplex::{OrientedEdge, OrientedTriangle, Simplex};

/// For each oriented half-edge `h = (u, v)`, the oriented triangles whose
/// leading half-edge is `h`, sorted by dihedral angle around the axis `v - u`.
#[derive(Clone, Debug)]
pub struct RotationInfo3 {
    incident: HashMap<OrientedEdge, Vec<OrientedTriangle>>,
}

impl RotationInfo3 {
    /// Build the rotation system from point coordinates and the set of 2-simplices.
    ///
    /// Each undirected triangle contributes both of its orientations; for each
    /// orientation the leading half-edge keys the bucket it is sorted into.
    pub fn build(points: &HashMap<usize, Vector3<f64>>, triangles: &[Simplex]) -> Self {
        let mut buckets: HashMap<OrientedEdge, Vec<(OrientedTriangle, Vector3<f64>)>> =
            HashMap::new();
        for tri in triangles {
            let verts: Vec<usize> = tri.nodes().iter().copied().collect();
            debug_assert_eq!(verts.len(), 3, "rotation3 only handles 2-simplices");
            let (a, b, c) = (verts[0], verts[1], verts[2]);
            for oriented in [
                OrientedTriangle::new(a, b, c),
                OrientedTriangle::new(a, c, b),
            ] {
                let h = oriented.leading_half_edge();
                let apex = oriented.verts()[2];
                let axis = (points[&h.v] - points[&h.u]).normalize();
                let apex_vec = project_perp(points[&apex] - points[&h.u], axis);
                buckets.entry(h).or_default().push((oriented, apex_vec));
            }
        }
        let mut incident = HashMap::with_capacity(buckets.len());
        for (h, mut entries) in buckets {
            let axis = (points[&h.v] - points[&h.u]).normalize();
            let (_, ref0) = entries[0];
            entries.sort_by(|(_, va), (_, vb)| {
                let aa = signed_angle_around_axis(ref0, *va, axis);
                let ab = signed_angle_around_axis(ref0, *vb, axis);
                aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
            });
            incident.insert(h, entries.into_iter().map(|(t, _)| t).collect());
        }
        Self { incident }
    }

    /// `next(h, t)`: the next oriented triangle sharing half-edge `h` after `t`.
    pub fn next(&self, h: OrientedEdge, t: OrientedTriangle) -> OrientedTriangle {
        let ring = self
            .incident
            .get(&h)
            .expect("half-edge must have a rotation entry");
        let pos = ring
            .iter()
            .position(|&x| x == t)
            .expect("triangle must be registered under its leading half-edge");
        ring[(pos + 1) % ring.len()]
    }

    pub fn ring_size(&self, h: OrientedEdge) -> usize {
        self.incident.get(&h).map_or(0, Vec::len)
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
    fn shared_edge_has_the_expected_ring_size() {
        let pts = bipyramid_points();
        let faces = bipyramid_faces();
        let rot = RotationInfo3::build(&pts, &faces);
        // Edge (0,1) is shared by triangles {0,1,2}, {0,1,3}, {0,1,4}: three
        // oriented triangles lead with half-edge (0,1).
        assert_eq!(rot.ring_size(OrientedEdge::new(0, 1)), 3);
    }

    #[test]
    fn next_is_a_permutation_of_the_ring() {
        let pts = bipyramid_points();
        let faces = bipyramid_faces();
        let rot = RotationInfo3::build(&pts, &faces);
        let h = OrientedEdge::new(0, 1);
        let t0 = OrientedTriangle::new(0, 1, 2);
        let t1 = rot.next(h, t0);
        let t2 = rot.next(h, t1);
        let t3 = rot.next(h, t2);
        assert_eq!(t3, t0);
        assert_ne!(t1, t0);
        assert_ne!(t2, t0);
        assert_ne!(t1, t2);
    }
}
