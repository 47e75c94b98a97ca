//! Core trait for layered dynamic programs.
//!
//! A layered DP fills a dense table one column ("layer") at a time, where
//! column `i + 1` depends only on column `i` and fixed problem data. To run a
//! recurrence through [`LayerEngine`](crate::engine::LayerEngine), implement
//! [`LayeredProblem`] for a struct that captures the instance.
//!
//! The engine only ever keeps the current frontier alive, so memory is
//! bounded by the frontier width plus whatever the frontier shares
//! structurally with earlier layers.

/// Trait for a layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `init_frontier()` is column 0.
/// - `forward_step(i, frontier_i)` maps column `i` to column `i + 1`.
/// - `finish(frontier_T)` turns the last column into the answer.
pub trait LayeredProblem {
    /// One column of the DP table.
    type Frontier;

    /// Answer extracted from the final column.
    type Output;

    /// Number of DP steps `T`.
    fn num_layers(&self) -> usize;

    /// Number of cells per column.
    ///
    /// Together with [`num_layers`](Self::num_layers) this defines the size
    /// of the equivalent dense table, which the engine checks against its
    /// ceiling before doing any work.
    fn frontier_width(&self) -> usize;

    /// Column 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from column `layer` to `layer + 1`.
    ///
    /// Must only depend on `frontier_i` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier;

    /// Extract the answer from the column at layer `T`.
    fn finish(&self, frontier_t: Self::Frontier) -> Self::Output;
}
