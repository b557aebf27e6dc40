//! The alpha complex: a filtered simplicial complex truncated at a squared-
//! radius parameter, treated as a black box above this module (see
//! `kernel::AlphaKernel2`).

mod delaunay2;
mod kernel;

pub use delaunay2::DelaunayAlphaKernel2;
pub use kernel::{AlphaKernel2, KernelOutput};

use std::collections::{BTreeSet, HashMap, HashSet};

use nalgebra::Vector2;

use crate::error::TopologyError;
use crate::simplex::Simplex;

/// A filtered simplicial complex, already truncated at a fixed radius.
///
/// `simplices[d]` holds every `d`-simplex present at the chosen radius.
/// Vertices (dimension 0) are always present for every point handed to the
/// constructor — the filtration never excludes a bare point.
#[derive(Clone, Debug, Default)]
pub struct AlphaComplex {
    nodes: BTreeSet<usize>,
    simplices: Vec<HashSet<Simplex>>,
}

impl AlphaComplex {
    /// Build the 2D alpha complex at `radius` from a kernel's filtered output.
    ///
    /// Every candidate simplex the kernel reports is included if its
    /// filtration value does not exceed `radius * radius`.
    pub fn build_2d(
        points: &HashMap<usize, Vector2<f64>>,
        radius: f64,
        kernel: &impl AlphaKernel2,
    ) -> Result<Self, TopologyError> {
        let threshold = radius * radius;
        let output = kernel.build(points)?;
        let mut simplices: Vec<HashSet<Simplex>> = vec![HashSet::new(), HashSet::new(), HashSet::new()];
        for (simplex, filt) in output.simplices {
            if filt <= threshold {
                let dim = simplex.dim();
                while simplices.len() <= dim {
                    simplices.push(HashSet::new());
                }
                simplices[dim].insert(simplex);
            }
        }
        let nodes = points.keys().copied().collect();
        simplices[0] = points.keys().map(|&v| Simplex::new([v])).collect();
        Ok(Self { nodes, simplices })
    }

    /// Build a complex directly from an explicit simplex list, skipping any
    /// filtration kernel. Used for 3D scenarios and hand-authored fixtures
    /// where no tetrahedralization kernel is wired up: the caller already
    /// knows which simplices are present at the radius of interest.
    pub fn from_simplices(nodes: impl IntoIterator<Item = usize>, simplices: Vec<Simplex>) -> Self {
        let nodes: BTreeSet<usize> = nodes.into_iter().collect();
        let max_dim = simplices.iter().map(Simplex::dim).max().unwrap_or(0);
        let mut by_dim: Vec<HashSet<Simplex>> = vec![HashSet::new(); max_dim.max(0) + 1];
        by_dim[0] = nodes.iter().map(|&v| Simplex::new([v])).collect();
        for s in simplices {
            let dim = s.dim();
            by_dim[dim].insert(s);
        }
        Self {
            nodes,
            simplices: by_dim,
        }
    }

    pub fn dim(&self) -> usize {
        self.simplices.len().saturating_sub(1)
    }

    pub fn nodes(&self) -> &BTreeSet<usize> {
        &self.nodes
    }

    /// All simplices of dimension `d`. Empty if `d` exceeds `dim()`.
    pub fn simplices(&self, d: usize) -> &HashSet<Simplex> {
        static EMPTY: std::sync::OnceLock<HashSet<Simplex>> = std::sync::OnceLock::new();
        self.simplices
            .get(d)
            .unwrap_or_else(|| EMPTY.get_or_init(HashSet::new))
    }

    pub fn edges(&self) -> Vec<Simplex> {
        self.simplices(1).iter().cloned().collect()
    }

    pub fn triangles(&self) -> Vec<Simplex> {
        self.simplices(2).iter().cloned().collect()
    }

    pub fn tetrahedra(&self) -> Vec<Simplex> {
        self.simplices(3).iter().cloned().collect()
    }

    /// Whether the 1-skeleton (nodes + edges) is a single connected component.
    /// A disconnected initial point cloud has no sensible alpha cycle and is
    /// rejected at construction time rather than produce a malformed topology.
    pub fn is_connected_skeleton(&self) -> bool {
        let Some(&start) = self.nodes.iter().next() else {
            return true;
        };
        let mut adj: HashMap<usize, Vec<usize>> = HashMap::new();
        for e in self.simplices(1) {
            let v: Vec<usize> = e.nodes().iter().copied().collect();
            adj.entry(v[0]).or_default().push(v[1]);
            adj.entry(v[1]).or_default().push(v[0]);
        }
        let mut seen = HashSet::new();
        let mut queue = std::collections::VecDeque::new();
        seen.insert(start);
        queue.push_back(start);
        while let Some(cur) = queue.pop_front() {
            for &n in adj.get(&cur).into_iter().flatten() {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() == self.nodes.len()
    }
}
