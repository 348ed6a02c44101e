//! Authoritative per-pair distance/time storage.
//!
//! The table keeps the raw attributes the graph weights are derived from, so
//! switching strategy never requires re-reading the source.  Every insert
//! writes both directions of the pair into both maps; a later insert for the
//! same pair (in either direction) overwrites the earlier values.

use rustc_hash::{FxHashMap, FxHashSet};

use sp_core::NodeId;

/// One directed entry of the table.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PairWeights {
    pub from:     NodeId,
    pub to:       NodeId,
    pub distance: f64,
    pub time:     f64,
}

#[derive(Clone, Debug, Default)]
pub struct WeightTable {
    distances: FxHashMap<(NodeId, NodeId), f64>,
    times:     FxHashMap<(NodeId, NodeId), f64>,
    /// Every id seen in an accepted record, including bare node declarations.
    nodes:     FxHashSet<NodeId>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `(distance, time)` for the pair in both directions.
    pub fn insert(&mut self, from: NodeId, to: NodeId, distance: f64, time: f64) {
        self.distances.insert((from, to), distance);
        self.distances.insert((to, from), distance);
        self.times.insert((from, to), time);
        self.times.insert((to, from), time);
        self.nodes.insert(from);
        self.nodes.insert(to);
    }

    /// Record a node that has no edges of its own.
    pub fn declare_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    pub fn clear(&mut self) {
        self.distances.clear();
        self.times.clear();
        self.nodes.clear();
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.distances.get(&(from, to)).copied()
    }

    pub fn time(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.times.get(&(from, to)).copied()
    }

    /// All directed entries, both directions of every pair, unordered.
    pub fn pairs(&self) -> impl Iterator<Item = PairWeights> + '_ {
        self.distances.iter().filter_map(|(&(from, to), &distance)| {
            self.times
                .get(&(from, to))
                .map(|&time| PairWeights { from, to, distance, time })
        })
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct unordered pairs (a self-loop counts once).
    pub fn pair_count(&self) -> usize {
        self.distances.keys().filter(|(a, b)| a <= b).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
