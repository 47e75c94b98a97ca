//! Maximal-cardinality subset sum as a layered DP.
//!
//! Layers are prefix lengths of the weight set (0..=n) and the frontier at
//! layer `j` is column `j` of three tables over partial sums `0..=target`:
//! - feasibility: some subset of `weights[..j]` sums exactly to `i`,
//! - count: the largest cardinality of such a subset, or [`INFEASIBLE`],
//! - chosen: the indices of that subset, ascending.
//!
//! Column `j` only reads column `j - 1`, so one column is live at a time and
//! the chosen-index sequences share their prefixes through [`IndexChain`].
//!
//! The answer is read from the last column at the **largest feasible partial
//! sum not exceeding the target**. A target that no subset hits exactly is
//! relaxed to the closest reachable sum below it, and in the worst case to 0
//! (the empty subset).
//!
//! Row 0 is never updated after initialization, so zero-valued weights are
//! only ever selected alongside a positive partial sum.

use crate::builder::LayerEngineBuilder;
use crate::chain::IndexChain;
use crate::error::{BoxAssistError, Result};
use crate::traits::LayeredProblem;
use crate::utils::{index_bound, TableLimits};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Count stored for partial sums no subset of the prefix reaches.
pub const INFEASIBLE: i64 = -1;

#[derive(Clone, Copy)]
pub struct SubsetSumProblem<'a> {
    weights: &'a [u32],
    target: usize,
}

/// One cell of the three tables at a fixed (partial sum, prefix) position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubsetCell {
    pub feasible: bool,
    pub count: i64,
    pub chosen: IndexChain,
}

/// Column of cells for all partial sums `0..=target`.
#[derive(Clone, Debug)]
pub struct SubsetFrontier {
    pub cells: Vec<SubsetCell>,
}

/// Reconstructed answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubsetSelection {
    /// Partial sum actually reached: the largest feasible value <= target.
    pub sum: u64,
    /// Indices into the weight set, ascending.
    pub indices: Vec<u32>,
}

impl SubsetCell {
    fn reachable_empty() -> Self {
        Self {
            feasible: true,
            count: 0,
            chosen: IndexChain::new(),
        }
    }

    fn unreachable() -> Self {
        Self {
            feasible: false,
            count: INFEASIBLE,
            chosen: IndexChain::new(),
        }
    }
}

impl<'a> SubsetSumProblem<'a> {
    /// Validate inputs and build the instance.
    ///
    /// A negative `target_sum` is only meaningful for an empty weight set,
    /// where it degrades to the `sum = 0` base case.
    pub fn new(weights: &'a [u32], target_sum: i64) -> Result<Self> {
        index_bound(weights.len())?;
        let target = if target_sum < 0 {
            if !weights.is_empty() {
                return Err(BoxAssistError::invalid(format!(
                    "negative target sum {target_sum} for {} weights",
                    weights.len()
                )));
            }
            0
        } else {
            usize::try_from(target_sum).map_err(|_| {
                BoxAssistError::invalid(format!("target sum {target_sum} is not addressable"))
            })?
        };
        Ok(Self { weights, target })
    }

    pub fn weights(&self) -> &'a [u32] {
        self.weights
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Cell `(i, layer + 1)` computed from column `layer`.
    fn step_cell(&self, i: usize, layer: usize, prev: &[SubsetCell]) -> SubsetCell {
        let inherited = &prev[i];
        let w = self.weights[layer] as usize;
        if i == 0 || i < w {
            return inherited.clone();
        }

        let with_current = &prev[i - w];
        if !(inherited.feasible || with_current.feasible) {
            return inherited.clone();
        }

        let count = inherited.count.max(with_current.count + 1);
        let chosen = if count > inherited.count {
            // `new` guarantees every layer index fits in u32
            with_current.chosen.pushed(layer as u32)
        } else {
            inherited.chosen.clone()
        };
        SubsetCell {
            feasible: true,
            count,
            chosen,
        }
    }
}

impl<'a> LayeredProblem for SubsetSumProblem<'a> {
    type Frontier = SubsetFrontier;
    type Output = SubsetSelection;

    fn num_layers(&self) -> usize {
        self.weights.len()
    }

    fn frontier_width(&self) -> usize {
        self.target.saturating_add(1)
    }

    fn init_frontier(&self) -> Self::Frontier {
        // j = 0: only the empty sum is reachable
        let mut cells = Vec::with_capacity(self.target + 1);
        cells.push(SubsetCell::reachable_empty());
        cells.resize(self.target + 1, SubsetCell::unreachable());
        SubsetFrontier { cells }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        let prev = frontier_i.cells.as_slice();

        #[cfg(feature = "parallel")]
        let cells = (0..prev.len())
            .into_par_iter()
            .map(|i| self.step_cell(i, layer, prev))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let cells = (0..prev.len())
            .map(|i| self.step_cell(i, layer, prev))
            .collect();

        SubsetFrontier { cells }
    }

    fn finish(&self, frontier_t: Self::Frontier) -> Self::Output {
        frontier_t
            .cells
            .iter()
            .enumerate()
            .rev()
            .find(|(_, cell)| cell.feasible)
            .map(|(sum, cell)| SubsetSelection {
                sum: sum as u64,
                indices: cell.chosen.to_vec(),
            })
            .unwrap_or_default()
    }
}

/// Largest-cardinality subset of `weights` summing to the largest feasible
/// value not exceeding `target_sum`, as ascending indices.
///
/// `n` must equal `weights.len()`.
pub fn solve(weights: &[u32], n: usize, target_sum: i64) -> Result<Vec<u32>> {
    solve_with_limits(weights, n, target_sum, TableLimits::default())
}

/// [`solve`] with an explicit ceiling on `(n + 1) * (target_sum + 1)`.
pub fn solve_with_limit(
    weights: &[u32],
    n: usize,
    target_sum: i64,
    max_table_cells: usize,
) -> Result<Vec<u32>> {
    let limits = TableLimits {
        max_table_cells,
        ..TableLimits::default()
    };
    solve_with_limits(weights, n, target_sum, limits)
}

/// [`solve`] with explicit table and column ceilings.
pub fn solve_with_limits(
    weights: &[u32],
    n: usize,
    target_sum: i64,
    limits: TableLimits,
) -> Result<Vec<u32>> {
    if n != weights.len() {
        return Err(BoxAssistError::invalid(format!(
            "declared length {n} does not match {} weights",
            weights.len()
        )));
    }
    let problem = SubsetSumProblem::new(weights, target_sum)?;
    let selection = LayerEngineBuilder::new(problem)
        .with_limits(limits)
        .build()
        .run()?;
    Ok(selection.indices)
}
