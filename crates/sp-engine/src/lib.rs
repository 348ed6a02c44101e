//! `sp-engine`: the orchestration layer of the shortest-path engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`engine`] | `Engine`: load, strategy switch, weight rebuild, queries |
//! | [`error`]  | `EngineError`, `EngineResult<T>`                          |
//!
//! # Rebuild model
//!
//! 1. `Engine::load` clears the weight table, fills it from an
//!    [`EdgeSource`](sp_loader::EdgeSource), then rebuilds.
//! 2. `Engine::set_strategy` keeps the table and rebuilds.
//! 3. A rebuild always constructs a brand-new [`Graph`](sp_graph::Graph)
//!    with the next generation number, publishes it behind an `Arc`, and
//!    binds a fresh [`PathFinder`](sp_graph::PathFinder) to it.
//!
//! Published graphs are never mutated, so a finder can never see a
//! half-built graph.  A finder handed out before a rebuild still answers
//! against its own snapshot; [`Engine::find_path_with`] rejects it with
//! [`EngineError::StaleFinder`].

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use error::{EngineError, EngineResult};
