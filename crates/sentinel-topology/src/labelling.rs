//! `CycleLabelling`: the mapping from boundary cycle to "an intruder may
//! still hide here", mutated exclusively through validated `LabelUpdate`s.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cmap::{BoundaryCycle, CombinatorialMap};
use crate::error::TopologyError;
use crate::label_update::LabelUpdate;
use crate::simplex::DartVertices;
use crate::topology::Topology;

/// A partial map from boundary cycle to "intruder possibly present".
///
/// Keyed on the cycle's dart set rather than an arena `CycleId`, so a label
/// survives unchanged across a topology rebuild as long as the cycle's darts
/// do not change — exactly the lifecycle described in the data model: a
/// cycle's entry is born when it appears in a `StateChange`'s added set and
/// dies when it appears in the removed set.
#[derive(Clone, Debug, Default)]
pub struct CycleLabelling<D: Ord + Copy + Eq + Hash + DartVertices> {
    labels: HashMap<BoundaryCycle<D>, bool>,
}

impl<D: Ord + Copy + Eq + Hash + DartVertices> CycleLabelling<D> {
    /// Seed from the initial topology: True for every cycle, False for
    /// cycles bounded by a top-dimensional simplex, and the alpha cycle and
    /// any cycle not yet connected to it are left out entirely.
    pub fn from_topology<M>(topology: &Topology<M>) -> Self
    where
        M: CombinatorialMap<Dart = D>,
    {
        let alpha_cycle = topology.map().cycle(topology.alpha_cycle()).clone();
        let top_simplices = topology.alpha_complex().simplices(topology.ambient_dim());
        let mut labels = HashMap::new();
        for cycle in topology.boundary_cycles() {
            if *cycle == alpha_cycle {
                continue;
            }
            if !topology.is_connected_cycle_darts(cycle) {
                continue;
            }
            let bounded = top_simplices.contains(&cycle.nodes());
            labels.insert(cycle.clone(), !bounded);
        }
        Self { labels }
    }

    pub fn has_intruder(&self) -> bool {
        self.labels.values().any(|&v| v)
    }

    pub fn contains(&self, cycle: &BoundaryCycle<D>) -> bool {
        self.labels.contains_key(cycle)
    }

    pub fn get(&self, cycle: &BoundaryCycle<D>) -> Option<bool> {
        self.labels.get(cycle).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoundaryCycle<D>, &bool)> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Apply a validated update. All-or-nothing: if the update is not valid
    /// against the current labelling, no mutation happens and a
    /// `TopologyError::Labelling` names the first cycle that failed the check.
    pub fn update(&mut self, label_update: &LabelUpdate<D>) -> Result<(), TopologyError> {
        if !label_update.is_valid(self) {
            let offending = label_update
                .mapping()
                .keys()
                .find(|c| !label_update.cycles_added().contains(c) && !self.contains(c))
                .map(|c| c.nodes());
            return Err(TopologyError::Labelling {
                cycle: offending.unwrap_or_default(),
            });
        }
        for cycle in label_update.cycles_added() {
            self.labels.entry(cycle.clone()).or_insert(true);
        }
        for (cycle, value) in label_update.mapping() {
            self.labels.insert(cycle.clone(), *value);
        }
        for cycle in label_update.cycles_removed() {
            self.labels.remove(cycle);
        }
        Ok(())
    }
}
