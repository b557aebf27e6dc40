//! `Topology`: an alpha complex paired with its combinatorial map, plus the
//! derived notions (alpha cycle, boundary/hole classification, face
//! connectivity) that the state-change classifier and labelling layers sit on.

use std::collections::{HashMap, HashSet, VecDeque};

use nalgebra::{Vector2, Vector3};

use crate::alpha::{AlphaComplex, AlphaKernel2};
use crate::cmap::{BoundaryCycle, CombinatorialMap, CombinatorialMap2, CombinatorialMap3};
use crate::error::TopologyError;
use crate::ids::CycleId;
use crate::simplex::Simplex;

#[derive(Clone, Debug)]
pub struct Topology<M: CombinatorialMap> {
    alpha_complex: AlphaComplex,
    map: M,
    ambient_dim: usize,
}

impl<M: CombinatorialMap> Topology<M> {
    pub fn new(alpha_complex: AlphaComplex, map: M, ambient_dim: usize) -> Self {
        Self {
            alpha_complex,
            map,
            ambient_dim,
        }
    }

    pub fn alpha_complex(&self) -> &AlphaComplex {
        &self.alpha_complex
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn ambient_dim(&self) -> usize {
        self.ambient_dim
    }

    pub fn simplices(&self, d: usize) -> &HashSet<Simplex> {
        self.alpha_complex.simplices(d)
    }

    pub fn boundary_cycles(&self) -> &[BoundaryCycle<M::Dart>] {
        self.map.boundary_cycles()
    }

    /// The distinguished boundary cycle along the outer fence.
    pub fn alpha_cycle(&self) -> CycleId {
        self.map.get_cycle(self.map.alpha_dart())
    }

    /// True iff the cycle's vertex set is itself a present top-dimensional
    /// simplex — the cycle bounds a filled-in cell rather than a hole.
    pub fn is_boundary(&self, cycle: CycleId) -> bool {
        let nodes = self.map.cycle(cycle).nodes();
        self.alpha_complex.simplices(self.ambient_dim).contains(&nodes)
    }

    /// Cycles that are not boundaries: the holes a possible intruder can hide in.
    pub fn homology_generators(&self) -> Vec<CycleId> {
        (0..self.map.boundary_cycles().len())
            .map(CycleId)
            .filter(|&id| !self.is_boundary(id))
            .collect()
    }

    /// Whether `cycle` reaches the alpha cycle through the face-connectivity
    /// graph: nodes are `(ambient_dim - 1)`-simplices, edges link two of them
    /// that both bound a common top-dimensional simplex.
    pub fn is_connected_cycle(&self, cycle: CycleId) -> bool {
        if cycle == self.alpha_cycle() {
            return true;
        }
        self.is_reachable_from_alpha(self.map.cycle(cycle).nodes_as_simplices())
    }

    /// Same check, but for a `BoundaryCycle` value carried over from another
    /// snapshot rather than one looked up by `CycleId` in this topology —
    /// used by the disconnect/reconnect label updates, which compare a
    /// cycle's connectivity before and after a transition.
    pub fn is_connected_cycle_darts(&self, cycle: &BoundaryCycle<M::Dart>) -> bool {
        self.is_reachable_from_alpha(cycle.nodes_as_simplices())
    }

    fn is_reachable_from_alpha(&self, targets: HashSet<Simplex>) -> bool {
        let adj = self.face_connectivity_graph();
        let starts = self.map.cycle(self.alpha_cycle()).nodes_as_simplices();

        let mut seen: HashSet<Simplex> = starts.clone();
        let mut queue: VecDeque<Simplex> = starts.into_iter().collect();
        while let Some(cur) = queue.pop_front() {
            if targets.contains(&cur) {
                return true;
            }
            if let Some(nbrs) = adj.get(&cur) {
                for n in nbrs {
                    if seen.insert(n.clone()) {
                        queue.push_back(n.clone());
                    }
                }
            }
        }
        false
    }

    fn face_connectivity_graph(&self) -> HashMap<Simplex, Vec<Simplex>> {
        let mut adj: HashMap<Simplex, Vec<Simplex>> = HashMap::new();
        for top in self.alpha_complex.simplices(self.ambient_dim) {
            let faces: Vec<Simplex> = top.faces().collect();
            for i in 0..faces.len() {
                for j in 0..faces.len() {
                    if i != j {
                        adj.entry(faces[i].clone()).or_default().push(faces[j].clone());
                    }
                }
            }
        }
        adj
    }
}

impl Topology<CombinatorialMap2> {
    pub fn build_2d(
        points: &HashMap<usize, Vector2<f64>>,
        radius: f64,
        kernel: &impl AlphaKernel2,
    ) -> Result<Self, TopologyError> {
        let complex = AlphaComplex::build_2d(points, radius, kernel)?;
        let edges = complex.edges();
        let map = CombinatorialMap2::build(points, &edges);
        Ok(Self::new(complex, map, 2))
    }
}

impl Topology<CombinatorialMap3> {
    /// Build a 3D topology from an explicit simplex list (no tetrahedralization
    /// kernel is shipped — see `alpha::delaunay2` for why the 2D path is the
    /// only one with a real kernel behind it).
    pub fn build_3d(
        points: &HashMap<usize, Vector3<f64>>,
        nodes: impl IntoIterator<Item = usize>,
        triangles: Vec<Simplex>,
        tetrahedra: Vec<Simplex>,
    ) -> Self {
        let mut simplices = triangles.clone();
        simplices.extend(tetrahedra);
        let complex = AlphaComplex::from_simplices(nodes, simplices);
        let map = CombinatorialMap3::build(points, &triangles);
        Self::new(complex, map, 3)
    }
}
