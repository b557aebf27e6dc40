//! A toy billiard motion model: mobile sensors bounce elastically inside the
//! unit square. This is purely illustrative — the out-of-scope "real" motion
//! models (Brownian, flocking, D'Orsogna, ...) belong to a separate crate.

use std::collections::HashMap;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sentinel_topology::simulation::MotionModel;

pub struct Billiard {
    velocities: HashMap<usize, Vector2<f64>>,
    fence_count: usize,
}

impl Billiard {
    /// `fence_count` sensors (indices `0..fence_count`) are stationary fence
    /// points; every other index gets a random initial velocity drawn from
    /// `seed`, so runs are bit-for-bit reproducible (scenario 6).
    pub fn seeded(points: &HashMap<usize, Vector2<f64>>, fence_count: usize, seed: u64, speed: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut velocities = HashMap::with_capacity(points.len());
        for &v in points.keys() {
            if v < fence_count {
                continue;
            }
            let theta = rng.gen_range(0.0..std::f64::consts::TAU);
            velocities.insert(v, Vector2::new(theta.cos(), theta.sin()) * speed);
        }
        Self { velocities, fence_count }
    }
}

impl MotionModel for Billiard {
    fn advance(&mut self, points: &HashMap<usize, Vector2<f64>>, dt: f64) -> HashMap<usize, Vector2<f64>> {
        let mut out = HashMap::with_capacity(points.len());
        for (&v, &p) in points {
            if v < self.fence_count {
                out.insert(v, p);
                continue;
            }
            let vel = self.velocities.entry(v).or_insert_with(Vector2::zeros);
            let mut next = p + *vel * dt;
            for axis in 0..2 {
                if next[axis] < 0.0 {
                    next[axis] = -next[axis];
                    vel[axis] = -vel[axis];
                } else if next[axis] > 1.0 {
                    next[axis] = 2.0 - next[axis];
                    vel[axis] = -vel[axis];
                }
            }
            out.insert(v, next);
        }
        out
    }
}
