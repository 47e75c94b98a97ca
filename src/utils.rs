//! Table-size arithmetic and limits.

use crate::error::{BoxAssistError, Result};

/// Default ceiling on `(layers + 1) * width` for a single engine run.
///
/// Bounds running time: every cell of the equivalent dense table is computed
/// once.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 28;

/// Default ceiling on the width of one column.
///
/// Bounds memory: two columns are live during a step, so for subset sum the
/// cells alone take `2 * width * size_of::<SubsetCell>()` bytes (24 bytes per
/// cell on 64-bit, about 200 MiB at this width) plus the shared chain links.
/// Targets up to roughly four million fit.
pub const DEFAULT_MAX_FRONTIER_WIDTH: usize = 1 << 22;

/// Ceilings checked by [`LayerEngine`](crate::LayerEngine) before a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLimits {
    /// Maximum `(layers + 1) * width`.
    pub max_table_cells: usize,
    /// Maximum cells in one column.
    pub max_frontier_width: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            max_frontier_width: DEFAULT_MAX_FRONTIER_WIDTH,
        }
    }
}

/// Exclusive upper bound of the indices of `len` items, as rendered `u32`s.
///
/// Fails with [`BoxAssistError::InvalidArgument`] when some index would not
/// fit in a `u32`.
pub fn index_bound(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        BoxAssistError::invalid(format!("{len} weights cannot be addressed by 32-bit indices"))
    })
}

/// Number of cells in a dense table with `num_layers + 1` columns of
/// `width` rows, or `None` if that does not fit in `usize`.
#[inline]
pub fn table_cells(num_layers: usize, width: usize) -> Option<usize> {
    num_layers.checked_add(1)?.checked_mul(width)
}

/// Same as [`table_cells`] but never overflows; used for error reporting.
#[inline]
pub fn table_cells_wide(num_layers: usize, width: usize) -> u128 {
    (num_layers as u128 + 1) * width as u128
}
