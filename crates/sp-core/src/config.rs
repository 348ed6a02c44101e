//! Engine configuration.

use crate::Strategy;

// ── EdgeFormat ────────────────────────────────────────────────────────────────

/// On-disk layout of an edge list.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeFormat {
    /// Whitespace-separated `from to distance time`, one record per line.
    /// `#` starts a comment line.  A line holding a single id declares a
    /// node with no edges.
    #[default]
    Plain,
    /// CSV with a `from,to,distance,time` header.  A row with only `from`
    /// filled in declares a node with no edges.
    Csv,
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `Engine::with_config`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Strategy active right after construction and after every load.
    pub strategy: Strategy,

    /// Layout of files passed to `Engine::load_file`.
    pub edge_format: EdgeFormat,

    /// `true`: malformed records are logged and skipped.  `false`: the first
    /// malformed record aborts the load.
    pub skip_malformed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy:       Strategy::ShortestDistance,
            edge_format:    EdgeFormat::Plain,
            skip_malformed: true,
        }
    }
}
