//! 2D rotation system: per-vertex circular adjacency by angle.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::geometry::angle_of;
use crate::simplex::{OrientedEdge, Simplex};

/// For each node `v`, the neighbours of `v` sorted counter-clockwise by
/// `atan2(p_w - p_v)`.
#[derive(Clone, Debug)]
pub struct RotationInfo2 {
    order: HashMap<usize, Vec<usize>>,
}

impl RotationInfo2 {
    /// Build the rotation system from point coordinates and the set of 1-simplices.
    pub fn build(points: &HashMap<usize, Vector2<f64>>, edges: &[Simplex]) -> Self {
        let mut neighbours: HashMap<usize, Vec<usize>> = HashMap::new();
        for e in edges {
            let verts: Vec<usize> = e.nodes().iter().copied().collect();
            debug_assert_eq!(verts.len(), 2, "rotation2 only handles 1-simplices");
            let (a, b) = (verts[0], verts[1]);
            neighbours.entry(a).or_default().push(b);
            neighbours.entry(b).or_default().push(a);
        }
        let mut order = HashMap::with_capacity(neighbours.len());
        for (v, mut nbrs) in neighbours {
            let pv = points[&v];
            nbrs.sort_by(|&w1, &w2| {
                let a1 = angle_of(points[&w1] - pv);
                let a2 = angle_of(points[&w2] - pv);
                a1.partial_cmp(&a2).unwrap_or(std::cmp::Ordering::Equal)
            });
            order.insert(v, nbrs);
        }
        Self { order }
    }

    /// `next((v,w))`: the neighbour of `v` following `w` in the circular order.
    pub fn next(&self, d: OrientedEdge) -> OrientedEdge {
        let nbrs = self
            .order
            .get(&d.u)
            .expect("dart endpoint must have a rotation entry");
        let pos = nbrs
            .iter()
            .position(|&w| w == d.v)
            .expect("dart must be among its own endpoint's incident edges");
        let next_w = nbrs[(pos + 1) % nbrs.len()];
        OrientedEdge::new(d.u, next_w)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.order.get(&v).map_or(0, Vec::len)
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
    fn next_cycles_through_all_neighbours_of_a_vertex() {
        let pts = square_points();
        let edges = square_edges();
        let rot = RotationInfo2::build(&pts, &edges);
        // vertex 0 only has two neighbours (1 and 3); next should alternate.
        let d = OrientedEdge::new(0, 1);
        let d2 = rot.next(d);
        assert_eq!(d2.u, 0);
        assert_ne!(d2, d);
        assert_eq!(rot.next(d2), d);
    }

    #[test]
    fn degree_counts_incident_edges() {
        let pts = square_points();
        let edges = square_edges();
        let rot = RotationInfo2::build(&pts, &edges);
        assert_eq!(rot.degree(0), 2);
    }
}
