//! `sp-loader`: edge-list parsing and the per-pair weight table.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`table`]  | `WeightTable`: pair-keyed distance/time maps + known node set  |
//! | [`loader`] | `EdgeSource` trait, `EdgeRecord`, `EdgeListFile`, `EdgeListText`, `LoadStats` |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                                    |
//!
//! The loader rejects records with negative or non-finite values.  Records
//! with zero distance or time are kept in the table; dropping them from the
//! search graph is the engine's job.

pub mod error;
pub mod loader;
pub mod table;


pub use error::{LoadError, LoadResult};
pub use loader::{
    EdgeListFile, EdgeListText, EdgeRecord, EdgeSource, LoadOptions, LoadStats, load_edge_list,
};
pub use table::{PairWeights, WeightTable};
