//! Problem implementations for the layered DP engine.
//!
//! These modules show how to implement [`LayeredProblem`](crate::traits::LayeredProblem)
//! for concrete dynamic programs:
//! - [`subset_sum`] : maximal-cardinality subset sum with index reconstruction.

pub mod subset_sum;
