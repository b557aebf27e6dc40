//! The `Simulation` driver: advances sensor positions tick by tick, forcing
//! every committed transition to be atomic via recursive bisection.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::alpha::AlphaKernel2;
use crate::cmap::CombinatorialMap2;
use crate::error::TopologyError;
use crate::label_update::{self, LabelUpdateKind};
use crate::labelling::CycleLabelling;
use crate::simplex::OrientedEdge;
use crate::state_change::StateChange;
use crate::topology::Topology;

/// Default recursion cap for bisection before giving up on atomicity.
pub const DEFAULT_RECURSION_CAP: u32 = 25;

/// Advances sensor positions by one `dt`. Motion models (billiard, Brownian,
/// flocking, ...) are out of scope for the core; the driver is generic over
/// this trait so collaborators can supply their own without the core
/// depending on them.
pub trait MotionModel {
    fn advance(&mut self, points: &HashMap<usize, Vector2<f64>>, dt: f64) -> HashMap<usize, Vector2<f64>>;
}

/// One committed atomic transition, or the terminal state of a run.
#[derive(Clone, Debug)]
pub struct CommittedStep {
    pub time: f64,
    pub kind: LabelUpdateKind,
    pub ambiguous: bool,
    pub has_intruder: bool,
}

/// Holds `(points, radius, dt, labelling, topology)` and drives time forward.
pub struct Simulation<K: AlphaKernel2> {
    points: HashMap<usize, Vector2<f64>>,
    radius: f64,
    dt: f64,
    time: f64,
    kernel: K,
    topology: Topology<CombinatorialMap2>,
    labelling: CycleLabelling<OrientedEdge>,
    recursion_cap: u32,
}

impl<K: AlphaKernel2> Simulation<K> {
    pub fn new(
        points: HashMap<usize, Vector2<f64>>,
        radius: f64,
        dt: f64,
        kernel: K,
    ) -> Result<Self, TopologyError> {
        let topology = Topology::build_2d(&points, radius, &kernel)?;
        if !topology.alpha_complex().is_connected_skeleton() {
            return Err(TopologyError::GraphNotConnected);
        }
        let labelling = CycleLabelling::from_topology(&topology);
        Ok(Self {
            points,
            radius,
            dt,
            time: 0.0,
            kernel,
            topology,
            labelling,
            recursion_cap: DEFAULT_RECURSION_CAP,
        })
    }

    pub fn with_recursion_cap(mut self, cap: u32) -> Self {
        self.recursion_cap = cap;
        self
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn has_intruder(&self) -> bool {
        self.labelling.has_intruder()
    }

    pub fn labelling(&self) -> &CycleLabelling<OrientedEdge> {
        &self.labelling
    }

    pub fn topology(&self) -> &Topology<CombinatorialMap2> {
        &self.topology
    }

    /// Advance one `dt` under `model`, bisecting internally until the
    /// resulting transition is atomic. Returns every atomic step actually
    /// committed along the way (more than one when bisection fires).
    pub fn step(&mut self, model: &mut dyn MotionModel) -> Result<Vec<CommittedStep>, TopologyError> {
        let next_points = model.advance(&self.points, self.dt);
        self.advance_to(next_points, self.time + self.dt, 0)
    }

    /// Run until `has_intruder()` is false or `end_time` is reached (0 means
    /// "run until clear"). Returns the time the run stopped at.
    pub fn run(&mut self, model: &mut dyn MotionModel, end_time: f64) -> Result<f64, TopologyError> {
        loop {
            if !self.has_intruder() {
                return Ok(self.time);
            }
            if end_time > 0.0 && self.time >= end_time {
                return Ok(self.time);
            }
            self.step(model)?;
        }
    }

    fn advance_to(
        &mut self,
        target_points: HashMap<usize, Vector2<f64>>,
        target_time: f64,
        depth: u32,
    ) -> Result<Vec<CommittedStep>, TopologyError> {
        let candidate = Topology::build_2d(&target_points, self.radius, &self.kernel)?;
        let change = StateChange::diff(&self.topology, &candidate);
        let update = label_update::classify(&change, &self.labelling);

        if update.is_atomic() {
            self.labelling.update(&update)?;
            self.topology = candidate;
            self.points = target_points;
            self.time = target_time;
            return Ok(vec![CommittedStep {
                time: self.time,
                kind: update.kind(),
                ambiguous: update.ambiguous,
                has_intruder: self.has_intruder(),
            }]);
        }

        if depth >= self.recursion_cap {
            return Err(TopologyError::MaxRecursionDepth {
                depth,
                case: change.case(),
            });
        }

        let mid_points = midpoint(&self.points, &target_points);
        let mid_time = (self.time + target_time) / 2.0;
        let mut committed = self.advance_to(mid_points, mid_time, depth + 1)?;
        committed.extend(self.advance_to(target_points, target_time, depth + 1)?);
        Ok(committed)
    }
}

fn midpoint(
    a: &HashMap<usize, Vector2<f64>>,
    b: &HashMap<usize, Vector2<f64>>,
) -> HashMap<usize, Vector2<f64>> {
    a.iter()
        .map(|(&v, p)| {
            let q = b.get(&v).copied().unwrap_or(*p);
            (v, (p + q) * 0.5)
        })
        .collect()
}
