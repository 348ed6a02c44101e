//! Edge-list loader.
//!
//! # Plain format (default)
//!
//! One record per line, fields separated by spaces:
//!
//! ```text
//! # from to distance time
//! 1 2 4 10
//! 2 5 6 5
//! 1 5 15 3
//! 8
//! ```
//!
//! A line holding a single id (`8` above) declares a node with no edges.
//! Ids may be negative.  Tokens after the fourth field are ignored, so
//! `1 2 4 10 # main road` is a valid edge.  Lines whose first field starts
//! with `#` and blank lines are ignored.
//!
//! # CSV format
//!
//! ```csv
//! from,to,distance,time
//! 1,2,4,10
//! 8,,,
//! ```
//!
//! A row with only `from` filled in declares a node.
//!
//! # Validation
//!
//! Unparsable records and records with a negative or non-finite distance or
//! time are malformed.  With [`LoadOptions::skip_malformed`] they are logged
//! and skipped; otherwise the first one aborts the load with
//! [`LoadError::Parse`].  Zero values are accepted.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use sp_core::{EdgeFormat, EngineConfig, NodeId};

use crate::{LoadError, LoadResult, WeightTable};

// ── Records ───────────────────────────────────────────────────────────────────

/// One undirected edge as read from a source.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EdgeRecord {
    pub from:     NodeId,
    pub to:       NodeId,
    pub distance: f64,
    pub time:     f64,
}

impl EdgeRecord {
    pub fn new(from: i64, to: i64, distance: f64, time: f64) -> Self {
        Self { from: NodeId(from), to: NodeId(to), distance, time }
    }

    fn validate(&self) -> Result<(), String> {
        for (what, value) in [("distance", self.distance), ("time", self.time)] {
            if !value.is_finite() {
                return Err(format!("non-finite {what} {value}"));
            }
            if value < 0.0 {
                return Err(format!("negative {what} {value}"));
            }
        }
        Ok(())
    }
}

enum Parsed {
    Edge(EdgeRecord),
    Node(NodeId),
}

#[derive(Deserialize)]
struct EdgeRow {
    from:     i64,
    to:       Option<i64>,
    distance: Option<f64>,
    time:     Option<f64>,
}

impl EdgeRow {
    fn into_parsed(self) -> Result<Parsed, String> {
        match (self.to, self.distance, self.time) {
            (None, None, None) => Ok(Parsed::Node(NodeId(self.from))),
            (Some(to), Some(distance), Some(time)) => {
                Ok(Parsed::Edge(EdgeRecord::new(self.from, to, distance, time)))
            }
            _ => Err("incomplete row: expected from only, or all of to/distance/time".to_owned()),
        }
    }
}

// ── Options & stats ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
pub struct LoadOptions {
    pub format:         EdgeFormat,
    pub skip_malformed: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { format: EdgeFormat::Plain, skip_malformed: true }
    }
}

impl From<&EngineConfig> for LoadOptions {
    fn from(config: &EngineConfig) -> Self {
        Self { format: config.edge_format, skip_malformed: config.skip_malformed }
    }
}

/// Summary of one load.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct LoadStats {
    /// Edge and node records accepted into the table.
    pub records: usize,
    /// Malformed records dropped.
    pub skipped: usize,
    /// Known nodes in the table after the load.
    pub nodes:   usize,
    /// Distinct unordered pairs in the table after the load.
    pub pairs:   usize,
}

// ── EdgeSource ────────────────────────────────────────────────────────────────

/// Anything that can fill a [`WeightTable`].
///
/// Records are added on top of whatever the table already holds; callers
/// that want a fresh load clear the table first.
pub trait EdgeSource {
    fn load_into(&self, table: &mut WeightTable) -> LoadResult<LoadStats>;
}

impl EdgeSource for [EdgeRecord] {
    /// In-memory records.  Invalid ones are always skipped.
    fn load_into(&self, table: &mut WeightTable) -> LoadResult<LoadStats> {
        let mut stats = LoadStats::default();
        for (i, rec) in self.iter().enumerate() {
            let line = i as u64 + 1;
            accept(Ok(Parsed::Edge(*rec)), line, true, table, &mut stats)?;
        }
        Ok(finish(stats, table))
    }
}

impl EdgeSource for Vec<EdgeRecord> {
    fn load_into(&self, table: &mut WeightTable) -> LoadResult<LoadStats> {
        self.as_slice().load_into(table)
    }
}

/// Edge list held in memory as text.
#[derive(Clone, Debug)]
pub struct EdgeListText<'a> {
    pub text:    &'a str,
    pub options: LoadOptions,
}

impl<'a> EdgeListText<'a> {
    pub fn new(text: &'a str, options: LoadOptions) -> Self {
        Self { text, options }
    }
}

impl EdgeSource for EdgeListText<'_> {
    fn load_into(&self, table: &mut WeightTable) -> LoadResult<LoadStats> {
        load_edge_list(self.text.as_bytes(), self.options, table)
    }
}

/// Edge list on disk.
#[derive(Clone, Debug)]
pub struct EdgeListFile {
    pub path:    PathBuf,
    pub options: LoadOptions,
}

impl EdgeListFile {
    pub fn new(path: impl AsRef<Path>, options: LoadOptions) -> Self {
        Self { path: path.as_ref().to_path_buf(), options }
    }
}

impl EdgeSource for EdgeListFile {
    fn load_into(&self, table: &mut WeightTable) -> LoadResult<LoadStats> {
        let file = std::fs::File::open(&self.path).map_err(LoadError::Io)?;
        info!("loading edge list from {}", self.path.display());
        load_edge_list(file, self.options, table)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse an edge list from any `Read` source into `table`.
///
/// Useful for testing (pass a byte slice) or loading from network streams.
pub fn load_edge_list<R: Read>(
    reader:  R,
    options: LoadOptions,
    table:   &mut WeightTable,
) -> LoadResult<LoadStats> {
    let stats = match options.format {
        EdgeFormat::Plain => load_plain(reader, options.skip_malformed, table)?,
        EdgeFormat::Csv   => load_csv(reader, options.skip_malformed, table)?,
    };
    Ok(finish(stats, table))
}

// ── Format readers ────────────────────────────────────────────────────────────

fn load_plain<R: Read>(reader: R, skip: bool, table: &mut WeightTable) -> LoadResult<LoadStats> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .quoting(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let mut stats = LoadStats::default();
    let mut record = csv::StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                // e.g. invalid UTF-8; the reader resumes at the next line.
                let line = e.position().map_or(0, |p| p.line());
                accept(Err(e.to_string()), line, skip, table, &mut stats)?;
                continue;
            }
        }
        let line = record.position().map_or(0, |p| p.line());
        // Runs of spaces yield empty fields; tabs stay inside one field.
        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
        match fields.first() {
            None => continue,
            Some(first) if first.starts_with('#') => continue,
            Some(_) => {}
        }
        accept(parse_plain(&fields), line, skip, table, &mut stats)?;
    }

    Ok(stats)
}

fn parse_plain(fields: &[&str]) -> Result<Parsed, String> {
    let id = |s: &str| {
        s.parse::<i64>()
            .map(NodeId)
            .map_err(|_| format!("invalid node id {s:?}"))
    };
    let value = |s: &str| s.parse::<f64>().map_err(|_| format!("invalid number {s:?}"));

    match *fields {
        [node] => Ok(Parsed::Node(id(node)?)),
        [from, to, distance, time, ..] => Ok(Parsed::Edge(EdgeRecord {
            from:     id(from)?,
            to:       id(to)?,
            distance: value(distance)?,
            time:     value(time)?,
        })),
        _ => Err(format!("expected 1 or at least 4 fields, found {}", fields.len())),
    }
}

fn load_csv<R: Read>(reader: R, skip: bool, table: &mut WeightTable) -> LoadResult<LoadStats> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut stats = LoadStats::default();
    let mut record = csv::StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                // Row-level errors (e.g. wrong field count) leave the reader usable.
                let line = e.position().map_or(0, |p| p.line());
                accept(Err(e.to_string()), line, skip, table, &mut stats)?;
                continue;
            }
        }
        let line = record.position().map_or(0, |p| p.line());
        let parsed = record
            .deserialize::<EdgeRow>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(EdgeRow::into_parsed);
        accept(parsed, line, skip, table, &mut stats)?;
    }

    Ok(stats)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn accept(
    parsed: Result<Parsed, String>,
    line:   u64,
    skip:   bool,
    table:  &mut WeightTable,
    stats:  &mut LoadStats,
) -> LoadResult<()> {
    let checked = parsed.and_then(|p| match p {
        Parsed::Edge(rec) => rec.validate().map(|()| Parsed::Edge(rec)),
        node => Ok(node),
    });

    match checked {
        Ok(Parsed::Edge(rec)) => {
            table.insert(rec.from, rec.to, rec.distance, rec.time);
            stats.records += 1;
        }
        Ok(Parsed::Node(id)) => {
            table.declare_node(id);
            stats.records += 1;
        }
        Err(message) if skip => {
            warn!("skipping malformed record at line {line}: {message}");
            stats.skipped += 1;
        }
        Err(message) => return Err(LoadError::Parse { line, message }),
    }
    Ok(())
}

fn finish(mut stats: LoadStats, table: &WeightTable) -> LoadStats {
    stats.nodes = table.node_count();
    stats.pairs = table.pair_count();
    info!(
        "loaded {} records ({} skipped): {} nodes, {} pairs",
        stats.records, stats.skipped, stats.nodes, stats.pairs
    );
    stats
}
