//! Reference 2D alpha-complex kernel: an incremental Bowyer-Watson Delaunay
//! triangulation, annotated per-simplex with its alpha-complex filtration
//! value (squared radius).
//!
//! This is the one concrete `AlphaKernel2` shipped with the crate. It exists
//! so the rest of the engine is exercisable without an external geometry
//! library; swapping in a production Delaunay crate later is a matter of
//! implementing `AlphaKernel2` once — nothing above this module needs to
//! change.
//!
//! Filtration convention (documented simplification, see `DESIGN.md`):
//! - a triangle's filtration value is its circumradius^2 (the textbook alpha-
//!   complex value for a Delaunay 2-simplex);
//! - an edge's filtration value is the smaller of `(len/2)^2` (the Čech value
//!   for the edge alone) and the circumradius^2 of its smallest attached
//!   triangle. This keeps the complex monotone (sub-simplices never enter
//!   later than the simplices that contain them) without implementing the
//!   full "attached/unattached" alpha-shape case split.

use std::collections::HashMap;

use nalgebra::{Matrix3, Vector2};

use crate::error::TopologyError;
use crate::simplex::Simplex;

use super::kernel::{AlphaKernel2, KernelOutput};

// Sentinel vertex ids for the bounding super-triangle. Real point indices are
// expected to be small dense ids (sensor counts, not billions), so these are
// safe to use as out-of-band markers.
const SUPER_A: usize = usize::MAX;
const SUPER_B: usize = usize::MAX - 1;
const SUPER_C: usize = usize::MAX - 2;

#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayAlphaKernel2;

impl AlphaKernel2 for DelaunayAlphaKernel2 {
    fn build(&self, points: &HashMap<usize, Vector2<f64>>) -> Result<KernelOutput, TopologyError> {
        let mut ids: Vec<usize> = points.keys().copied().collect();
        ids.sort_unstable();

        let mut out = Vec::new();
        if ids.len() < 2 {
            return Ok(KernelOutput { simplices: out });
        }
        if ids.len() == 2 {
            let (u, v) = (ids[0], ids[1]);
            let len = (points[&u] - points[&v]).norm();
            out.push((Simplex::new([u, v]), (len * 0.5).powi(2)));
            return Ok(KernelOutput { simplices: out });
        }

        let triangulation = bowyer_watson(points, &ids)?;

        let mut edge_min_tri: HashMap<(usize, usize), f64> = HashMap::new();
        for &tri in &triangulation {
            let (pa, pb, pc) = (points[&tri[0]], points[&tri[1]], points[&tri[2]]);
            let Some((_, r2)) = circumcenter_and_radius2(pa, pb, pc) else {
                continue;
            };
            out.push((Simplex::new(tri), r2));
            for (u, v) in tri_edges(tri) {
                let key = canon_edge(u, v);
                let slot = edge_min_tri.entry(key).or_insert(f64::INFINITY);
                if r2 < *slot {
                    *slot = r2;
                }
            }
        }
        for ((u, v), tri_min) in edge_min_tri {
            let len = (points[&u] - points[&v]).norm();
            let own = (len * 0.5).powi(2);
            out.push((Simplex::new([u, v]), own.min(tri_min)));
        }

        Ok(KernelOutput { simplices: out })
    }
}

fn bowyer_watson(
    points: &HashMap<usize, Vector2<f64>>,
    ids: &[usize],
) -> Result<Vec<[usize; 3]>, TopologyError> {
    let mut coords: HashMap<usize, Vector2<f64>> = points.clone();
    let (min, max) = bounding_box(ids.iter().map(|id| points[id]));
    let extent = (max.x - min.x).max(max.y - min.y).max(1.0);
    let mid = (min + max) * 0.5;
    coords.insert(SUPER_A, mid + Vector2::new(-20.0 * extent, -extent));
    coords.insert(SUPER_B, mid + Vector2::new(20.0 * extent, -extent));
    coords.insert(SUPER_C, mid + Vector2::new(0.0, 20.0 * extent));

    let mut triangulation: Vec<[usize; 3]> = vec![[SUPER_A, SUPER_B, SUPER_C]];

    for &pid in ids {
        let p = coords[&pid];
        let bad: Vec<usize> = triangulation
            .iter()
            .enumerate()
            .filter(|(_, &tri)| {
                let (pa, pb, pc) = (coords[&tri[0]], coords[&tri[1]], coords[&tri[2]]);
                point_in_circumcircle(pa, pb, pc, p)
            })
            .map(|(i, _)| i)
            .collect();
        if bad.is_empty() {
            return Err(TopologyError::kernel_failure(format!(
                "Bowyer-Watson found no triangle to retriangulate for point {pid}"
            )));
        }

        let mut edge_count: HashMap<(usize, usize), u32> = HashMap::new();
        for &bi in &bad {
            for (u, v) in tri_edges(triangulation[bi]) {
                *edge_count.entry(canon_edge(u, v)).or_insert(0) += 1;
            }
        }
        let boundary: Vec<(usize, usize)> = edge_count
            .into_iter()
            .filter(|&(_, c)| c == 1)
            .map(|(e, _)| e)
            .collect();

        let bad_set: std::collections::HashSet<usize> = bad.into_iter().collect();
        triangulation = triangulation
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !bad_set.contains(i))
            .map(|(_, t)| t)
            .collect();

        for (u, v) in boundary {
            let new_tri = if signed_area(coords[&u], coords[&v], p) > 0.0 {
                [u, v, pid]
            } else {
                [v, u, pid]
            };
            triangulation.push(new_tri);
        }
    }

    triangulation.retain(|t| {
        !t.contains(&SUPER_A) && !t.contains(&SUPER_B) && !t.contains(&SUPER_C)
    });
    Ok(triangulation)
}

fn bounding_box(mut pts: impl Iterator<Item = Vector2<f64>>) -> (Vector2<f64>, Vector2<f64>) {
    let first = pts.next().unwrap_or_else(Vector2::zeros);
    let mut min = first;
    let mut max = first;
    for p in pts {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

#[inline]
fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Incircle test assuming `a, b, c` are wound counter-clockwise.
fn point_in_circumcircle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, p: Vector2<f64>) -> bool {
    let (a, b, c) = if signed_area(a, b, c) > 0.0 {
        (a, b, c)
    } else {
        (a, c, b)
    };
    let m = Matrix3::new(
        a.x - p.x,
        a.y - p.y,
        (a.x - p.x).powi(2) + (a.y - p.y).powi(2),
        b.x - p.x,
        b.y - p.y,
        (b.x - p.x).powi(2) + (b.y - p.y).powi(2),
        c.x - p.x,
        c.y - p.y,
        (c.x - p.x).powi(2) + (c.y - p.y).powi(2),
    );
    m.determinant() > 0.0
}

fn circumcenter_and_radius2(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> Option<(Vector2<f64>, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < 1e-12 {
        return None;
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Vector2::new(ux, uy);
    Some((center, (a - center).norm_squared()))
}

#[inline]
fn tri_edges(t: [usize; 3]) -> [(usize, usize); 3] {
    [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
}

#[inline]
fn canon_edge(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}
