//! `sp-core`: foundational types for the shortest-path engine.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and minimal external ones (`log` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`strategy`]    | `Strategy`: distance/time edge-cost functions        |
//! | [`config`]      | `EngineConfig`, `EdgeFormat`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod strategy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EdgeFormat, EngineConfig};
pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use strategy::Strategy;
