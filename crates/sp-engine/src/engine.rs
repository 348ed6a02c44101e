//! The engine: owns the weight table and the active strategy, and publishes
//! one weighted graph snapshot per load or strategy switch.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use sp_core::{EngineConfig, NodeId, Strategy};
use sp_graph::{Graph, PathFinder, PathResult};
use sp_loader::{EdgeListFile, EdgeSource, LoadOptions, LoadStats, PairWeights, WeightTable};

use crate::{EngineError, EngineResult};

/// Shortest-path engine over a reloadable, re-weightable topology.
///
/// Single-threaded: every mutating call takes `&mut self`, so no query can
/// run while a rebuild is in progress.
///
/// # Example
///
/// ```
/// use sp_core::{NodeId, Strategy};
/// use sp_engine::Engine;
/// use sp_loader::EdgeRecord;
///
/// let mut engine = Engine::new();
/// engine
///     .load(&[
///         EdgeRecord::new(1, 2, 4.0, 10.0),
///         EdgeRecord::new(2, 5, 6.0, 5.0),
///         EdgeRecord::new(1, 5, 15.0, 3.0),
///     ][..])
///     .unwrap();
///
/// let by_distance = engine.find_path(NodeId(1), NodeId(5));
/// assert_eq!(by_distance.total_weight, 10.0);
///
/// engine.set_strategy(Strategy::LeastTime);
/// let by_time = engine.find_path(NodeId(1), NodeId(5));
/// assert_eq!(by_time.path, vec![NodeId(1), NodeId(5)]);
/// ```
#[derive(Debug)]
pub struct Engine {
    config:     EngineConfig,
    table:      WeightTable,
    strategy:   Strategy,
    generation: u64,
    graph:      Arc<Graph>,
    finder:     PathFinder,
    last_load:  Option<LoadStats>,
}

impl Engine {
    /// Empty engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Empty engine.  `config.strategy` becomes the active strategy.
    pub fn with_config(config: EngineConfig) -> Self {
        let graph  = Arc::new(Graph::with_generation(0));
        let finder = PathFinder::new(Arc::clone(&graph), config.strategy);
        Self {
            strategy:   config.strategy,
            config,
            table:      WeightTable::new(),
            generation: 0,
            graph,
            finder,
            last_load:  None,
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Replace all data with the contents of `source`.
    ///
    /// Prior state is cleared first.  On failure the engine is left empty
    /// (no partial graph is published) and the loader error is returned.
    pub fn load<S: EdgeSource + ?Sized>(&mut self, source: &S) -> EngineResult<LoadStats> {
        self.table.clear();
        self.last_load = None;

        match source.load_into(&mut self.table) {
            Ok(stats) => {
                self.rebuild_graph_weights();
                self.last_load = Some(stats);
                info!(
                    "engine loaded: {} nodes, {} edges ({})",
                    self.graph.node_count(),
                    self.graph.edge_count(),
                    self.strategy.name()
                );
                Ok(stats)
            }
            Err(e) => {
                warn!("load failed, engine cleared: {e}");
                self.table.clear();
                self.rebuild_graph_weights();
                Err(EngineError::Load(e))
            }
        }
    }

    /// Load an edge-list file using this engine's configured format and
    /// malformed-record policy.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> EngineResult<LoadStats> {
        let source = EdgeListFile::new(path, LoadOptions::from(&self.config));
        self.load(&source)
    }

    // ── Strategy ──────────────────────────────────────────────────────────

    /// Switch the active strategy and rebuild every edge weight.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        debug!("strategy {} -> {}", self.strategy.as_str(), strategy.as_str());
        self.strategy = strategy;
        self.rebuild_graph_weights();
    }

    /// Like [`set_strategy`](Self::set_strategy), but by identifier.
    /// Unknown identifiers select the distance strategy.  Returns the
    /// strategy actually applied.
    pub fn set_strategy_by_name(&mut self, name: &str) -> Strategy {
        let strategy = Strategy::from_name_or_default(name);
        self.set_strategy(strategy);
        strategy
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Display name of the strategy the current finder reports.
    pub fn strategy_name(&self) -> &'static str {
        self.finder.strategy_name()
    }

    // ── Rebuild ───────────────────────────────────────────────────────────

    /// Build a fresh graph from the weight table under the active strategy,
    /// publish it as the next generation, and bind a new finder to it.
    pub fn rebuild_graph_weights(&mut self) {
        let generation = self.generation + 1;
        let graph = build_graph(&self.table, self.strategy, generation);
        debug!(
            "rebuilt generation {generation}: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        self.generation = generation;
        self.graph      = Arc::new(graph);
        self.finder     = PathFinder::new(Arc::clone(&self.graph), self.strategy);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest path under the active strategy.
    pub fn find_path(&self, from: NodeId, to: NodeId) -> PathResult {
        self.finder.find_path(from, to)
    }

    /// A handle to the current finder.  It keeps its graph snapshot alive
    /// after later rebuilds; check it with [`find_path_with`](Self::find_path_with).
    pub fn path_finder(&self) -> PathFinder {
        self.finder.clone()
    }

    /// Run `finder` only if it is bound to the current generation.
    pub fn find_path_with(
        &self,
        finder: &PathFinder,
        from:   NodeId,
        to:     NodeId,
    ) -> EngineResult<PathResult> {
        if finder.generation() != self.generation {
            return Err(EngineError::StaleFinder {
                bound:   finder.generation(),
                current: self.generation,
            });
        }
        Ok(finder.find_path(from, to))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.graph.has_node(id)
    }

    pub fn is_isolated(&self, id: NodeId) -> bool {
        self.graph.is_isolated(id)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn weight_table(&self) -> &WeightTable {
        &self.table
    }

    /// Stats of the last successful load; `None` before any load or after
    /// a failed one.
    pub fn last_load(&self) -> Option<LoadStats> {
        self.last_load
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

/// Turn the table into a weighted graph.
///
/// Every known node is registered first so that declared and zero-cost-only
/// nodes exist as isolated nodes.  Pairs are then visited in canonical-key
/// order; each unordered pair yields exactly one `add_edge`.  Pairs with a
/// non-positive distance or time never reach the graph.
fn build_graph(table: &WeightTable, strategy: Strategy, generation: u64) -> Graph {
    let mut graph = Graph::with_capacity(table.node_count(), generation);

    let mut nodes: Vec<NodeId> = table.nodes().collect();
    nodes.sort_unstable();
    for id in nodes {
        graph.add_node(id);
    }

    let mut pairs: Vec<PairWeights> = table.pairs().collect();
    pairs.sort_unstable_by_key(|p| (NodeId::canonical_pair(p.from, p.to), p.from));

    let mut seen: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
    for p in pairs {
        if p.distance <= 0.0 || p.time <= 0.0 {
            continue;
        }
        let key = NodeId::canonical_pair(p.from, p.to);
        if !seen.insert(key) {
            continue;
        }
        graph.add_edge(key.0, key.1, strategy.weight(p.distance, p.time));
    }

    graph
}
