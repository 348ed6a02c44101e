//! Strongly typed node identifier.
//!
//! `NodeId` is `Copy + Ord + Hash` so it can be used as a map key, a set
//! element and a canonical pair component without ceremony.  Ids are opaque
//! signed integers: they come straight from the edge-list source (negative
//! ids included) and are never used as `Vec` indices, so there is no
//! dense-index helper or sentinel value.

use std::fmt;

/// Identifier of a graph node as it appears in the edge-list source.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub i64);

impl NodeId {
    /// Order an unordered pair as `(min, max)`.
    ///
    /// Both directions of an undirected edge map to the same key.
    #[inline]
    pub fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    #[inline(always)]
    fn from(raw: i64) -> NodeId {
        NodeId(raw)
    }
}

impl From<NodeId> for i64 {
    #[inline(always)]
    fn from(id: NodeId) -> i64 {
        id.0
    }
}
