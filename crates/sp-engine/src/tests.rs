//! Unit tests for sp-engine.
//!
//! Topologies are fed as text through the real loader so the whole
//! load → rebuild → query pipeline is exercised.

#[cfg(test)]
mod helpers {
    use sp_core::NodeId;
    use sp_loader::{EdgeListText, LoadOptions};

    use crate::Engine;

    pub fn n(id: i64) -> NodeId {
        NodeId(id)
    }

    /// Edges `(1,2,d=4,t=10)`, `(2,5,d=6,t=5)`, `(1,5,d=15,t=3)`, the
    /// `5-6-7` cycle with a slow `5-7` shortcut, a small tail, and node `8`
    /// declared without edges.
    pub const NETWORK: &str = "\
# from to distance time
1 2 4 10
2 5 6 5
1 5 15 3
5 6 1 1
6 7 1 1
7 5 1 1
5 7 5 5
2 3 2 2
3 4 3 7
8
";

    pub fn engine() -> Engine {
        let mut e = Engine::new();
        e.load(&EdgeListText::new(NETWORK, LoadOptions::default())).unwrap();
        e
    }

    /// Sum of the graph's edge weights along `path` (cheapest parallel).
    pub fn summed(engine: &Engine, path: &[NodeId]) -> f64 {
        path.windows(2)
            .map(|w| {
                engine
                    .graph()
                    .adjacent_edges(w[0])
                    .iter()
                    .filter(|e| e.to == w[1])
                    .map(|e| e.weight)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

// ── Load & rebuild ────────────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use sp_core::{EdgeFormat, EngineConfig};
    use sp_loader::{EdgeListText, EdgeRecord, LoadOptions};

    use super::helpers::{NETWORK, engine, n};
    use crate::{Engine, EngineError};

    #[test_log::test]
    fn counts_after_load() {
        let e = engine();
        // Nodes 1..=8; the 5-7 records collapse into one pair.
        assert_eq!(e.node_count(), 8);
        assert_eq!(e.edge_count(), 8);
        let stats = e.last_load().unwrap();
        assert_eq!(stats.records, 10);
        assert_eq!(stats.pairs, 8);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn empty_engine_answers_not_found() {
        let e = Engine::new();
        assert_eq!(e.node_count(), 0);
        assert!(!e.find_path(n(1), n(2)).found);
        assert!(!e.find_path(n(1), n(1)).found);
        assert!(e.last_load().is_none());
    }

    #[test]
    fn reload_is_idempotent() {
        let mut e = engine();
        let before: Vec<_> = [(1, 5), (1, 4), (5, 7), (8, 1)]
            .iter()
            .map(|&(a, b)| e.find_path(n(a), n(b)))
            .collect();
        let counts = (e.node_count(), e.edge_count());

        e.load(&EdgeListText::new(NETWORK, LoadOptions::default())).unwrap();

        assert_eq!((e.node_count(), e.edge_count()), counts);
        for (i, &(a, b)) in [(1, 5), (1, 4), (5, 7), (8, 1)].iter().enumerate() {
            let r = e.find_path(n(a), n(b));
            assert_eq!(r.found, before[i].found);
            assert_eq!(r.path, before[i].path);
            assert_eq!(r.total_weight, before[i].total_weight);
        }
    }

    #[test]
    fn reload_replaces_previous_data() {
        let mut e = engine();
        e.load(&[EdgeRecord::new(10, 11, 1.0, 1.0)][..]).unwrap();
        assert_eq!(e.node_count(), 2);
        assert!(!e.has_node(n(1)));
        assert!(e.find_path(n(10), n(11)).found);
    }

    #[test_log::test]
    fn failed_load_leaves_engine_empty() {
        let mut e = engine();
        let err = e.load_file("/nonexistent/sp-engine/edges.txt").unwrap_err();
        assert!(matches!(err, EngineError::Load(_)));
        assert_eq!(e.node_count(), 0);
        assert_eq!(e.edge_count(), 0);
        assert!(e.weight_table().is_empty());
        assert!(e.last_load().is_none());
        assert!(!e.find_path(n(1), n(5)).found);
    }

    #[test]
    fn strict_parse_failure_is_a_load_error() {
        let config = EngineConfig { skip_malformed: false, ..EngineConfig::default() };
        let options = LoadOptions::from(&config);
        let mut e = Engine::with_config(config);
        let err = e.load(&EdgeListText::new("1 2 4 10\n1 2 oops 3\n", options)).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        assert_eq!(e.node_count(), 0);
    }

    #[test]
    fn zero_cost_pairs_are_dropped_but_nodes_stay() {
        let mut e = Engine::new();
        e.load(&EdgeListText::new("1 2 4 10\n2 3 0 5\n3 4 1 0\n", LoadOptions::default()))
            .unwrap();
        assert_eq!(e.edge_count(), 1);
        assert!(e.has_node(n(3)));
        assert!(e.is_isolated(n(3)));
        assert!(e.is_isolated(n(4)));
        assert!(!e.find_path(n(2), n(3)).found);
        // The table still holds the raw values.
        assert_eq!(e.weight_table().distance(n(2), n(3)), Some(0.0));
    }

    #[test]
    fn csv_config_drives_load_file() {
        let path = std::env::temp_dir().join(format!("sp-engine-{}.csv", std::process::id()));
        std::fs::write(&path, "from,to,distance,time\n1,2,4,10\n2,5,6,5\n1,5,15,3\n").unwrap();

        let config = EngineConfig { edge_format: EdgeFormat::Csv, ..EngineConfig::default() };
        let mut e = Engine::with_config(config);
        assert_eq!(e.config().edge_format, EdgeFormat::Csv);
        let stats = e.load_file(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(stats.unwrap().pairs, 3);
        assert_eq!(e.find_path(n(1), n(5)).total_weight, 10.0);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let a = engine();
        let b = engine();
        for id in 1..=8 {
            assert_eq!(a.graph().adjacent_edges(n(id)), b.graph().adjacent_edges(n(id)));
        }
    }
}

// ── Strategy switching ────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy {
    use sp_core::{EngineConfig, Strategy};
    use sp_loader::{EdgeListText, LoadOptions};

    use super::helpers::{engine, n, summed};
    use crate::Engine;

    #[test]
    fn distance_then_time_scenario() {
        let mut e = engine();
        assert_eq!(e.strategy(), Strategy::ShortestDistance);
        let r = e.find_path(n(1), n(5));
        assert!(r.found);
        assert_eq!(r.path, vec![n(1), n(2), n(5)]);
        assert_eq!(r.total_weight, 10.0);

        e.set_strategy(Strategy::LeastTime);
        let r = e.find_path(n(1), n(5));
        assert!(r.found);
        assert_eq!(r.path, vec![n(1), n(5)]);
        assert_eq!(r.total_weight, 3.0);
        assert_eq!(e.strategy_name(), "Least Time");
    }

    #[test]
    fn toggling_back_reproduces_weights() {
        let mut e = engine();
        let first = e.find_path(n(1), n(4)).total_weight;
        e.set_strategy(Strategy::LeastTime);
        let timed = e.find_path(n(1), n(4)).total_weight;
        e.set_strategy(Strategy::ShortestDistance);
        assert_eq!(e.find_path(n(1), n(4)).total_weight, first);
        e.set_strategy(Strategy::LeastTime);
        assert_eq!(e.find_path(n(1), n(4)).total_weight, timed);
    }

    #[test]
    fn weights_follow_stored_attributes() {
        let mut e = engine();
        for strategy in Strategy::ALL {
            e.set_strategy(strategy);
            let r = e.find_path(n(4), n(6));
            assert!(r.found);
            let expected: f64 = r
                .path
                .windows(2)
                .map(|w| {
                    let t = e.weight_table();
                    match strategy {
                        Strategy::ShortestDistance => t.distance(w[0], w[1]).unwrap(),
                        Strategy::LeastTime        => t.time(w[0], w[1]).unwrap(),
                    }
                })
                .sum();
            assert_eq!(r.total_weight, expected, "{strategy}");
            assert_eq!(summed(&e, &r.path), expected);
        }
    }

    #[test]
    fn strategy_switch_keeps_topology() {
        let mut e = engine();
        let counts = (e.node_count(), e.edge_count());
        e.set_strategy(Strategy::LeastTime);
        assert_eq!((e.node_count(), e.edge_count()), counts);
        assert!(e.is_isolated(n(8)));
    }

    #[test_log::test]
    fn unknown_name_falls_back_to_distance() {
        let mut e = engine();
        e.set_strategy(Strategy::LeastTime);
        let applied = e.set_strategy_by_name("scenic");
        assert_eq!(applied, Strategy::ShortestDistance);
        assert_eq!(e.strategy(), Strategy::ShortestDistance);
        assert_eq!(e.find_path(n(1), n(5)).total_weight, 10.0);
        assert_eq!(e.set_strategy_by_name("time"), Strategy::LeastTime);
    }

    #[test]
    fn configured_strategy_survives_load() {
        let config = EngineConfig { strategy: Strategy::LeastTime, ..EngineConfig::default() };
        let mut e = Engine::with_config(config);
        e.load(&[sp_loader::EdgeRecord::new(1, 5, 15.0, 3.0)][..]).unwrap();
        assert_eq!(e.strategy(), Strategy::LeastTime);
        assert_eq!(e.find_path(n(1), n(5)).total_weight, 3.0);
    }

    #[test]
    fn negative_ids_route_like_any_other() {
        let mut e = Engine::new();
        e.load(&EdgeListText::new("-1 2 4 10 # ramp\n2 -5 6 5\n", LoadOptions::default()))
            .unwrap();
        let r = e.find_path(n(-1), n(-5));
        assert!(r.found);
        assert_eq!(r.path, vec![n(-1), n(2), n(-5)]);
        assert_eq!(r.total_weight, 10.0);
    }
}

// ── Query semantics ───────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use sp_core::Strategy;

    use super::helpers::{engine, n};

    #[test]
    fn isolated_node_scenario() {
        let e = engine();
        assert!(e.has_node(n(8)));
        assert!(e.is_isolated(n(8)));
        for x in [1, 2, 5, 7] {
            assert!(!e.find_path(n(8), n(x)).found);
        }
        let r = e.find_path(n(8), n(8));
        assert!(r.found);
        assert_eq!(r.path, vec![n(8)]);
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn unknown_node_scenario() {
        let e = engine();
        assert!(!e.has_node(n(99_999)));
        assert!(!e.is_isolated(n(99_999)));
        let r = e.find_path(n(1), n(99_999));
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert!(!e.find_path(n(99_999), n(99_999)).found);
    }

    #[test]
    fn cycle_scenario_takes_two_hops() {
        let e = engine();
        // The later `5 7 5 5` record overwrites `7 5 1 1`, so the direct
        // edge costs 5 and the way round through 6 costs 2.
        let r = e.find_path(n(5), n(7));
        assert!(r.found);
        assert_eq!(r.path, vec![n(5), n(6), n(7)]);
        assert_eq!(r.total_weight, 2.0);
    }

    #[test]
    fn same_node_on_known_node() {
        let e = engine();
        let r = e.find_path(n(3), n(3));
        assert!(r.found);
        assert_eq!(r.path, vec![n(3)]);
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn symmetric_totals() {
        let mut e = engine();
        for strategy in Strategy::ALL {
            e.set_strategy(strategy);
            for a in 1..=7 {
                for b in 1..=7 {
                    let ab = e.find_path(n(a), n(b));
                    let ba = e.find_path(n(b), n(a));
                    assert_eq!(ab.found, ba.found);
                    assert_eq!(ab.total_weight, ba.total_weight, "{a}<->{b} {strategy}");
                }
            }
        }
    }

    #[test]
    fn elapsed_is_measured() {
        let e = engine();
        let r = e.find_path(n(1), n(4));
        assert!(r.found);
        // Only sanity: a duration was recorded and is not absurd.
        assert!(r.elapsed.as_secs() < 5);
    }
}

// ── Generations ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod generations {
    use sp_core::Strategy;

    use super::helpers::{engine, n};
    use crate::EngineError;

    #[test]
    fn every_rebuild_bumps_generation() {
        let mut e = engine();
        let g = e.generation();
        assert_eq!(e.graph().generation(), g);
        e.set_strategy(Strategy::LeastTime);
        assert_eq!(e.generation(), g + 1);
        e.rebuild_graph_weights();
        assert_eq!(e.generation(), g + 2);
        assert_eq!(e.path_finder().generation(), g + 2);
    }

    #[test]
    fn current_finder_is_accepted() {
        let e = engine();
        let finder = e.path_finder();
        let r = e.find_path_with(&finder, n(1), n(5)).unwrap();
        assert_eq!(r.total_weight, 10.0);
    }

    #[test]
    fn stale_finder_is_rejected() {
        let mut e = engine();
        let finder = e.path_finder();
        let bound = finder.generation();
        e.set_strategy(Strategy::LeastTime);

        let err = e.find_path_with(&finder, n(1), n(5)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::StaleFinder { bound: b, current } if b == bound && current == bound + 1
        ));

        // The detached snapshot itself is intact and still distance-weighted.
        assert_eq!(finder.find_path(n(1), n(5)).total_weight, 10.0);
        assert_eq!(finder.strategy_name(), "Shortest Distance");
    }
}
