//! Layer-by-layer DP driver.
//!
//! The engine checks the equivalent dense table size and the width of a
//! single column against their ceilings, then folds `forward_step` over all layers, keeping a single frontier
//! alive, and hands the last frontier to the problem for extraction.
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::error::{BoxAssistError, Result};
use crate::traits::LayeredProblem;
use crate::utils::{table_cells, table_cells_wide, TableLimits};

/// Layered DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use box_assist::{LayerEngine, problems::subset_sum::SubsetSumProblem};
///
/// let weights = [3u32, 34, 4, 12, 5, 2];
/// let problem = SubsetSumProblem::new(&weights, 9).unwrap();
/// let selection = LayerEngine::new(problem).run().unwrap();
/// assert_eq!(selection.sum, 9);
/// assert_eq!(selection.indices, vec![0, 2, 5]);
/// ```
pub struct LayerEngine<P: LayeredProblem> {
    problem: P,
    limits: TableLimits,
}

impl<P: LayeredProblem> LayerEngine<P> {
    /// Create a new engine with [`TableLimits::default`].
    pub fn new(problem: P) -> Self {
        Self::with_limits(problem, TableLimits::default())
    }

    /// Create a new engine with an explicit table-size ceiling and the
    /// default column width ceiling.
    pub fn with_max_table_cells(problem: P, max_table_cells: usize) -> Self {
        Self::with_limits(
            problem,
            TableLimits {
                max_table_cells,
                ..TableLimits::default()
            },
        )
    }

    pub fn with_limits(problem: P, limits: TableLimits) -> Self {
        Self { problem, limits }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn limits(&self) -> TableLimits {
        self.limits
    }

    /// Return the configured table ceiling.
    pub fn max_table_cells(&self) -> usize {
        self.limits.max_table_cells
    }

    /// Return the configured column width ceiling.
    pub fn max_frontier_width(&self) -> usize {
        self.limits.max_frontier_width
    }

    /// Reject the run if the dense table or one column would exceed its
    /// ceiling.
    fn check_budget(&self) -> Result<()> {
        let t = self.problem.num_layers();
        let w = self.problem.frontier_width();
        let over = match table_cells(t, w) {
            Some(cells) if cells <= self.limits.max_table_cells => None,
            _ => Some((table_cells_wide(t, w), self.limits.max_table_cells)),
        };
        let over = over.or_else(|| {
            (w > self.limits.max_frontier_width)
                .then_some((w as u128, self.limits.max_frontier_width))
        });
        match over {
            None => Ok(()),
            Some((requested, limit)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    requested = %requested,
                    limit,
                    layers = t,
                    width = w,
                    "table exceeds ceiling"
                );
                Err(BoxAssistError::ResourceLimitExceeded { requested, limit })
            }
        }
    }

    /// Run all layers and extract the answer.
    ///
    /// Fails with [`BoxAssistError::ResourceLimitExceeded`] before allocating
    /// anything if the table or a column is over budget.
    pub fn run(&self) -> Result<P::Output> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "layer_run",
            layers = self.problem.num_layers(),
            width = self.problem.frontier_width()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.check_budget()?;

        let t = self.problem.num_layers();
        let mut frontier = self.problem.init_frontier();
        for layer in 0..t {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("forward_step", layer);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            frontier = self.problem.forward_step(layer, &frontier);
        }
        Ok(self.problem.finish(frontier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Prefix sums of a sequence, one layer per element.
    struct PrefixSum(Vec<u64>);

    /// Declares a wide frontier without ever allocating it.
    struct Wide(usize);

    impl LayeredProblem for Wide {
        type Frontier = ();
        type Output = ();
        fn num_layers(&self) -> usize {
            1
        }
        fn frontier_width(&self) -> usize {
            self.0
        }
        fn init_frontier(&self) {}
        fn forward_step(&self, _layer: usize, _frontier_i: &()) {}
        fn finish(&self, _frontier_t: ()) {}
    }

    impl LayeredProblem for PrefixSum {
        type Frontier = u64;
        type Output = u64;
        fn num_layers(&self) -> usize {
            self.0.len()
        }
        fn frontier_width(&self) -> usize {
            1
        }
        fn init_frontier(&self) -> u64 {
            0
        }
        fn forward_step(&self, layer: usize, frontier_i: &u64) -> u64 {
            frontier_i + self.0[layer]
        }
        fn finish(&self, frontier_t: u64) -> u64 {
            frontier_t
        }
    }

    #[test]
    fn folds_every_layer_in_order() {
        let engine = LayerEngine::new(PrefixSum(vec![1, 2, 3, 4]));
        assert_eq!(engine.run(), Ok(10));
    }

    #[test]
    fn zero_layers_returns_initial_frontier() {
        let engine = LayerEngine::new(PrefixSum(Vec::new()));
        assert_eq!(engine.run(), Ok(0));
    }

    #[test]
    fn budget_is_inclusive() {
        // 4 layers, width 1 => 5 cells
        let engine = LayerEngine::with_max_table_cells(PrefixSum(vec![1; 4]), 5);
        assert_eq!(engine.run(), Ok(4));

        let engine = LayerEngine::with_max_table_cells(PrefixSum(vec![1; 4]), 4);
        let err = engine.run().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
        assert_eq!(
            err,
            BoxAssistError::ResourceLimitExceeded {
                requested: 5,
                limit: 4
            }
        );
    }

    #[test]
    fn width_ceiling_is_inclusive() {
        let limits = TableLimits {
            max_table_cells: usize::MAX,
            max_frontier_width: 8,
        };
        assert_eq!(LayerEngine::with_limits(Wide(8), limits).run(), Ok(()));

        let err = LayerEngine::with_limits(Wide(9), limits).run().unwrap_err();
        assert_eq!(
            err,
            BoxAssistError::ResourceLimitExceeded {
                requested: 9,
                limit: 8
            }
        );
    }

    #[test]
    fn default_width_ceiling_applies_under_the_cell_ceiling() {
        // 2 * 2^27 cells fit the table ceiling, one 2^27 column does not
        let width = 1 << 27;
        let engine = LayerEngine::new(Wide(width));
        assert!(table_cells(1, width).unwrap() <= engine.max_table_cells());
        let err = engine.run().unwrap_err();
        assert_eq!(
            err,
            BoxAssistError::ResourceLimitExceeded {
                requested: width as u128,
                limit: engine.max_frontier_width()
            }
        );
    }
}
