//! Single-source, single-target Dijkstra over a [`Graph`] snapshot.
//!
//! # Weights
//!
//! The finder reads weights straight from the graph.  Its [`Strategy`] is
//! only used for reporting; the engine has already applied the strategy
//! when it built the graph.
//!
//! # No caching
//!
//! Every query runs a fresh search.  A graph can be replaced by a rebuild
//! at any moment, and a cross-query cache would go stale with it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use sp_core::{NodeId, Strategy};

use crate::Graph;

// ── PathResult ────────────────────────────────────────────────────────────────

/// Outcome of one [`PathFinder::find_path`] call.
///
/// Unknown endpoints and unreachable targets both yield `found == false`;
/// the two cases are deliberately not told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Nodes from source to target inclusive; empty when not found.
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path` (0 when not found).
    pub total_weight: f64,
    pub found: bool,
    /// Wall-clock time spent in the query.  Informational only.
    pub elapsed: Duration,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self { path: Vec::new(), total_weight: 0.0, found: false, elapsed: Duration::ZERO }
    }

    fn trivial(node: NodeId) -> Self {
        Self { path: vec![node], total_weight: 0.0, found: true, elapsed: Duration::ZERO }
    }

    /// Number of edges traversed (0 for a trivial or missing path).
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ── Frontier entry ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    dist: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    // Reversed so that BinaryHeap (max-heap) pops the smallest distance.
    // Secondary key NodeId makes equal-cost pops deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── PathFinder ────────────────────────────────────────────────────────────────

/// Dijkstra search bound to one immutable graph snapshot.
///
/// Cheap to clone: the graph is shared through an `Arc`.
#[derive(Clone, Debug)]
pub struct PathFinder {
    graph:    Arc<Graph>,
    strategy: Strategy,
}

impl PathFinder {
    pub fn new(graph: Arc<Graph>, strategy: Strategy) -> Self {
        Self { graph, strategy }
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Display name of the strategy the bound graph was weighted with.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Generation of the bound graph snapshot.
    pub fn generation(&self) -> u64 {
        self.graph.generation()
    }

    /// Shortest path from `from` to `to`, timed.
    pub fn find_path(&self, from: NodeId, to: NodeId) -> PathResult {
        let start = Instant::now();
        let mut result = self.dijkstra(from, to);
        result.elapsed = start.elapsed();
        trace!(
            "find_path {from} -> {to}: found={} weight={} in {:?}",
            result.found, result.total_weight, result.elapsed
        );
        result
    }

    fn dijkstra(&self, from: NodeId, to: NodeId) -> PathResult {
        let graph = &*self.graph;

        // Unknown endpoints first: this also covers `from == to` unknown.
        if !graph.has_node(from) || !graph.has_node(to) {
            return PathResult::not_found();
        }
        if from == to {
            return PathResult::trivial(from);
        }
        if graph.is_isolated(from) {
            return PathResult::not_found();
        }

        // Absent key = +infinity.
        let mut dist:      FxHashMap<NodeId, f64>    = FxHashMap::default();
        let mut parent:    FxHashMap<NodeId, NodeId> = FxHashMap::default();
        let mut finalized: FxHashSet<NodeId>         = FxHashSet::default();
        let mut heap:      BinaryHeap<HeapEntry>     = BinaryHeap::new();

        dist.insert(from, 0.0);
        heap.push(HeapEntry { dist: 0.0, node: from });

        while let Some(HeapEntry { dist: d, node: u }) = heap.pop() {
            // Stale entry from an earlier, worse relaxation.
            if !finalized.insert(u) {
                continue;
            }
            if u == to {
                break;
            }

            for edge in graph.adjacent_edges(u) {
                let v = edge.to;
                if finalized.contains(&v) {
                    continue;
                }
                let candidate = d + edge.weight;
                let improves = dist.get(&v).is_none_or(|&known| candidate < known);
                if improves {
                    dist.insert(v, candidate);
                    parent.insert(v, u);
                    heap.push(HeapEntry { dist: candidate, node: v });
                }
            }
        }

        let total_weight = match dist.get(&to) {
            Some(&w) if finalized.contains(&to) => w,
            _ => return PathResult::not_found(),
        };

        match reconstruct_path(from, to, &parent) {
            Some(path) => PathResult { path, total_weight, found: true, elapsed: Duration::ZERO },
            None => {
                warn!("broken parent chain while reconstructing {from} -> {to}; reporting not found");
                PathResult::not_found()
            }
        }
    }
}

/// Walk parent pointers from `to` back to `from` and return the path in
/// `from → to` order.  `None` if the chain breaks before reaching `from`.
pub(crate) fn reconstruct_path(
    from:   NodeId,
    to:     NodeId,
    parent: &FxHashMap<NodeId, NodeId>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = *parent.get(&cur)?;
        path.push(cur);
        // A cycle in the parent map would otherwise never terminate.
        if path.len() > parent.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}
