//! Maximal-cardinality subset sum (BoxAssist)
//!
//! Given a multiset of non-negative weights and a target sum, this crate
//! finds the subset with the **most elements** whose sum is the largest
//! reachable value not exceeding the target, and reports it as indices into
//! the input.
//!
//! ## Core idea
//! 1. Decode the host's byte buffer into `u32` weights ([`codec`]).
//! 2. If the target covers the whole set, answer with every index.
//! 3. Otherwise run the layered DP in [`problems::subset_sum`] through
//!    [`LayerEngine`], one column per prefix of the weight set.
//! 4. Render the chosen indices as a comma-separated list ([`format`]).
//!
//! The engine keeps a single DP column alive and shares the chosen-index
//! sequences between cells ([`chain::IndexChain`]), so memory grows with the
//! target sum rather than with the full `n x sum` table. The table size and
//! the column width are checked against configurable ceilings
//! ([`TableLimits`]) before any work is done.
//!
//! ## Quick start
//! ```
//! use box_assist::facade::{BoxAssist, Value};
//!
//! let bytes: Vec<u8> = [3u32, 34, 4, 12, 5, 2]
//!     .iter()
//!     .flat_map(|w| w.to_le_bytes())
//!     .collect();
//! let ba = BoxAssist::new();
//! let out = ba.call_by_name("Calculate", &[Value::Bytes(bytes), Value::Int(9)]).unwrap();
//! assert_eq!(out, Value::Str("0,2,5".into()));
//! ```
//!
//! ## Features
//! - `tracing` (default): spans around engine runs and facade calls.
//! - `parallel`: fill each DP column with rayon.
//! - `heavy`: enables large stress tests.

pub mod builder;
pub mod chain;
pub mod codec;
pub mod engine;
pub mod error;
pub mod facade;
pub mod format;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::LayerEngineBuilder;
pub use crate::engine::LayerEngine;
pub use crate::error::{BoxAssistError, ErrorKind, Result};
pub use crate::facade::BoxAssist;
pub use crate::problems::subset_sum::solve;
pub use crate::traits::LayeredProblem;
pub use crate::utils::TableLimits;
