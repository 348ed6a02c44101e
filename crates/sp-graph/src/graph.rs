//! Undirected weighted graph.
//!
//! # Data layout
//!
//! Adjacency lists keyed by [`NodeId`] in an `FxHashMap`, plus a separate
//! node-existence set.  Every logical edge is stored twice, once in each
//! endpoint's list, so neighbour lookup is a single hash probe followed by a
//! contiguous slice scan.
//!
//! A node in the node set whose list is empty is *isolated*.  A node outside
//! the node set is *unknown*; isolation queries on unknown nodes are `false`.
//!
//! # Generations
//!
//! The engine never edits a published graph.  Each rebuild produces a new
//! `Graph` tagged with a fresh generation number, so a
//! [`PathFinder`](crate::PathFinder) bound to an older snapshot can be
//! detected instead of silently reading different weights.

use rustc_hash::{FxHashMap, FxHashSet};

use sp_core::NodeId;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One directed adjacency entry: the neighbour and the search weight.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to:     NodeId,
    pub weight: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected graph with non-negative `f64` weights.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency:  FxHashMap<NodeId, Vec<Edge>>,
    nodes:      FxHashSet<NodeId>,
    edge_count: usize,
    generation: u64,
}

impl Graph {
    /// Empty graph at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph tagged with `generation`.
    pub fn with_generation(generation: u64) -> Self {
        Self { generation, ..Self::default() }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize, generation: u64) -> Self {
        Self {
            adjacency:  FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            nodes:      FxHashSet::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
            generation,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register `id`.  Idempotent: an existing adjacency list is untouched.
    pub fn add_node(&mut self, id: NodeId) {
        if self.nodes.insert(id) {
            self.adjacency.entry(id).or_default();
        }
    }

    /// Add an undirected edge, creating either endpoint if needed.
    ///
    /// Both directions are appended and the logical-edge counter grows by
    /// exactly one.  Parallel edges and self-loops are accepted as given; a
    /// self-loop appends two entries to the same list.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        debug_assert!(weight >= 0.0, "negative edge weight {weight}");
        self.add_node(from);
        self.add_node(to);
        self.adjacency.entry(from).or_default().push(Edge { to, weight });
        self.adjacency.entry(to).or_default().push(Edge { to: from, weight });
        self.edge_count += 1;
    }

    /// Drop every node and edge.  The generation is kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.nodes.clear();
        self.edge_count = 0;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Outgoing adjacency entries of `id`; empty for unknown or isolated
    /// nodes.
    #[inline]
    pub fn adjacent_edges(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// `true` only for known nodes with no adjacency entries.
    pub fn is_isolated(&self, id: NodeId) -> bool {
        self.has_node(id) && self.adjacent_edges(id).is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Iterator over all known node ids, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}
