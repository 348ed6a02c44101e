//! `sp-graph`: weighted undirected graph and shortest-path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`graph`]  | `Graph` (adjacency lists + node set), `Edge`           |
//! | [`finder`] | `PathFinder` (Dijkstra), `PathResult`                  |
//!
//! Search never fails: unknown nodes, unreachable targets and internal
//! inconsistencies all come back as a not-found [`PathResult`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Edge`.                 |

pub mod finder;
pub mod graph;


pub use finder::{PathFinder, PathResult};
pub use graph::{Edge, Graph};
