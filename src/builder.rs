use crate::utils::TableLimits;
use crate::{LayerEngine, LayeredProblem};

pub struct LayerEngineBuilder<P: LayeredProblem> {
    problem: P,
    max_table_cells: Option<usize>,
    max_frontier_width: Option<usize>,
}

impl<P: LayeredProblem> LayerEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            max_table_cells: None,
            max_frontier_width: None,
        }
    }
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = Some(max_table_cells);
        self
    }
    pub fn with_max_frontier_width(mut self, max_frontier_width: usize) -> Self {
        self.max_frontier_width = Some(max_frontier_width);
        self
    }
    pub fn with_limits(self, limits: TableLimits) -> Self {
        self.with_max_table_cells(limits.max_table_cells)
            .with_max_frontier_width(limits.max_frontier_width)
    }
    pub fn build(self) -> LayerEngine<P> {
        let defaults = TableLimits::default();
        let limits = TableLimits {
            max_table_cells: self.max_table_cells.unwrap_or(defaults.max_table_cells),
            max_frontier_width: self
                .max_frontier_width
                .unwrap_or(defaults.max_frontier_width),
        };
        LayerEngine::with_limits(self.problem, limits)
    }
}
