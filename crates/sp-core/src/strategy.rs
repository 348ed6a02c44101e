//! Edge-cost strategies.
//!
//! A [`Strategy`] turns an edge's two base attributes (distance, time) into
//! the single scalar weight that Dijkstra minimises.  The variant set is
//! closed; adding a cost function means adding a variant and one match arm in
//! [`Strategy::weight`].  The search itself never looks at the strategy: the
//! engine bakes weights into the graph before any query runs.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::{CoreError, CoreResult};

/// The active rule converting `(distance, time)` into a search weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Weight = distance.
    #[default]
    ShortestDistance,
    /// Weight = time.
    LeastTime,
}

impl Strategy {
    /// Every variant, in declaration order.
    pub const ALL: [Strategy; 2] = [Strategy::ShortestDistance, Strategy::LeastTime];

    /// Search weight of an edge under this strategy.
    #[inline]
    pub fn weight(self, distance: f64, time: f64) -> f64 {
        match self {
            Strategy::ShortestDistance => distance,
            Strategy::LeastTime        => time,
        }
    }

    /// Human-readable name for reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::ShortestDistance => "Shortest Distance",
            Strategy::LeastTime        => "Least Time",
        }
    }

    /// Short machine identifier, accepted back by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::ShortestDistance => "distance",
            Strategy::LeastTime        => "time",
        }
    }

    /// Lenient lookup: any unrecognised identifier selects
    /// [`Strategy::ShortestDistance`].
    pub fn from_name_or_default(name: &str) -> Strategy {
        name.parse().unwrap_or_else(|_| {
            warn!("unknown strategy {name:?}, falling back to {}", Strategy::default().as_str());
            Strategy::default()
        })
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    /// Accepts the machine identifier, the display name, or the
    /// `snake_case` variant name, case-insensitively.
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "shortest distance" | "shortest_distance" => Ok(Strategy::ShortestDistance),
            "time" | "least time" | "least_time"                   => Ok(Strategy::LeastTime),
            _ => Err(CoreError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
