//! console: load an edge list, switch strategies, and print query results.
//!
//! ```text
//! cargo run -p console -- [EDGE_FILE] [CONFIG_JSON]
//! ```
//!
//! `EDGE_FILE` defaults to the bundled `data/sample.txt`.  `CONFIG_JSON` is an
//! optional serialized `EngineConfig`.  Set `RUST_LOG=debug` to see rebuilds.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use sp_core::{EngineConfig, NodeId, Strategy};
use sp_engine::Engine;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_EDGES:  &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.txt");
const BENCH_QUERIES:  u32  = 100;
const ISOLATED_PROBE: NodeId = NodeId(8);
const UNKNOWN_PROBE:  NodeId = NodeId(99_999);

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report(engine: &Engine, from: NodeId, to: NodeId) {
    let result = engine.find_path(from, to);
    println!("  {from} -> {to} [{}]", engine.strategy_name());
    if result.found {
        let hops: Vec<String> = result.path.iter().map(NodeId::to_string).collect();
        println!("    path:   {}", hops.join(" -> "));
        println!("    weight: {:.2}", result.total_weight);
        println!("    time:   {} µs", result.elapsed.as_micros());
    } else {
        println!("    no path from {from} to {to}");
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing config {}", path.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);
    let edges: PathBuf = args.next().map_or_else(|| PathBuf::from(DEFAULT_EDGES), PathBuf::from);
    let config_path: Option<PathBuf> = args.next().map(PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    let mut engine = Engine::with_config(config);

    engine
        .load_file(&edges)
        .with_context(|| format!("loading {}", edges.display()))?;

    println!("Loaded {} ({:?})", edges.display(), engine.config().edge_format);
    println!("  nodes: {}", engine.node_count());
    println!("  edges: {}", engine.edge_count());

    // ── Same query under each strategy ────────────────────────────────────
    for strategy in Strategy::ALL {
        engine.set_strategy(strategy);
        println!("\n{strategy}");
        report(&engine, NodeId(1), NodeId(5));
    }

    // ── Edge cases ────────────────────────────────────────────────────────
    println!("\nIsolated node");
    if engine.is_isolated(ISOLATED_PROBE) {
        println!("  node {ISOLATED_PROBE} is isolated");
    } else {
        println!("  node {ISOLATED_PROBE} is not isolated or does not exist");
    }
    report(&engine, ISOLATED_PROBE, NodeId(1));

    println!("\nSame start and target");
    report(&engine, NodeId(1), NodeId(1));

    println!("\nUnknown node");
    report(&engine, NodeId(1), UNKNOWN_PROBE);

    // ── Repeated queries ──────────────────────────────────────────────────
    let start = Instant::now();
    for _ in 0..BENCH_QUERIES {
        engine.find_path(NodeId(1), NodeId(5));
    }
    let total = start.elapsed();
    println!(
        "\n{BENCH_QUERIES} queries in {} µs ({:.2} µs/query)",
        total.as_micros(),
        total.as_micros() as f64 / BENCH_QUERIES as f64
    );

    Ok(())
}
