//! Expansion strategies for grids that grow beyond their original pattern
//!
//! A grid consults its [`Expansion`] exactly when a location lookup misses the
//! registered cells. Returning a value registers a new cell at the requested
//! row and column; returning `None` leaves the grid unchanged and the lookup
//! reports absence. Strategies only decide values, the grid owns registration,
//! so a registered location always carries a value.

use crate::spatial::graph::GridBounds;

/// Read access to registered values while an expansion decision is made
pub(crate) trait CellLookup<V> {
    /// Value registered at a row and column, if any
    fn value_at(&self, row: i64, col: i64) -> Option<&V>;
}

/// Read-only view handed to expansion strategies
pub struct GridView<'a, V> {
    rows: usize,
    columns: usize,
    cells: &'a dyn CellLookup<V>,
}

impl<'a, V> GridView<'a, V> {
    pub(crate) const fn new(rows: usize, columns: usize, cells: &'a dyn CellLookup<V>) -> Self {
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Row count of the original pattern
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Column count of the original pattern
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Value currently registered at a row and column
    pub fn value_at(&self, row: i64, col: i64) -> Option<&V> {
        self.cells.value_at(row, col)
    }
}

/// Strategy deciding whether a missing cell comes into existence
pub trait Expansion<V> {
    /// Value for a new cell at `(row, col)`, or `None` to leave it absent
    fn expand(&self, row: i64, col: i64, view: &GridView<'_, V>) -> Option<V>;
}

impl<V, F> Expansion<V> for F
where
    F: Fn(i64, i64, &GridView<'_, V>) -> Option<V>,
{
    fn expand(&self, row: i64, col: i64, view: &GridView<'_, V>) -> Option<V> {
        self(row, col, view)
    }
}

/// Grids keep exactly the cells of their pattern
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExpansion;

impl<V> Expansion<V> for NoExpansion {
    fn expand(&self, _row: i64, _col: i64, _view: &GridView<'_, V>) -> Option<V> {
        None
    }
}

/// Every missing cell is registered with a padding value
#[derive(Debug, Clone)]
pub struct Fill<V> {
    padding: V,
    window: Option<GridBounds>,
}

impl<V> Fill<V> {
    /// Unbounded fill: any row and column becomes a cell
    pub const fn new(padding: V) -> Self {
        Self {
            padding,
            window: None,
        }
    }

    /// Fill restricted to cells inside `window`
    pub const fn within(padding: V, window: GridBounds) -> Self {
        Self {
            padding,
            window: Some(window),
        }
    }
}

impl<V: Clone> Expansion<V> for Fill<V> {
    fn expand(&self, row: i64, col: i64, _view: &GridView<'_, V>) -> Option<V> {
        match &self.window {
            Some(window) if !window.contains(row, col) => None,
            _ => Some(self.padding.clone()),
        }
    }
}

/// Missing cells repeat the original pattern in every direction
#[derive(Debug, Clone, Copy, Default)]
pub struct Tiled {
    window: Option<GridBounds>,
}

impl Tiled {
    /// Unbounded tiling
    pub const fn new() -> Self {
        Self { window: None }
    }

    /// Tiling restricted to cells inside `window`
    pub const fn within(window: GridBounds) -> Self {
        Self {
            window: Some(window),
        }
    }

    /// Tiling restricted to `copies` repetitions of the pattern on every side
    ///
    /// Window edges saturate at the `i64` range.
    pub const fn repeated(rows: usize, columns: usize, copies: usize) -> Self {
        let (min_row, max_row) = repeated_span(rows, copies);
        let (min_col, max_col) = repeated_span(columns, copies);
        Self::within(GridBounds {
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    /// Rectangle the tiling is restricted to, `None` when unbounded
    pub const fn window(&self) -> Option<GridBounds> {
        self.window
    }
}

/// First and last index covered by `copies` repetitions of `size` around the original
const fn repeated_span(size: usize, copies: usize) -> (i64, i64) {
    let size = saturating_i64(size);
    let copies = saturating_i64(copies);
    let before = copies.saturating_mul(size);
    let through = copies.saturating_add(1).saturating_mul(size);
    (before.saturating_neg(), through.saturating_sub(1))
}

const fn saturating_i64(value: usize) -> i64 {
    if value > i64::MAX as usize {
        i64::MAX
    } else {
        value as i64
    }
}

impl<V: Clone> Expansion<V> for Tiled {
    fn expand(&self, row: i64, col: i64, view: &GridView<'_, V>) -> Option<V> {
        if let Some(window) = &self.window {
            if !window.contains(row, col) {
                return None;
            }
        }
        if view.rows() == 0 || view.columns() == 0 {
            return None;
        }
        let source_row = row.rem_euclid(view.rows() as i64);
        let source_col = col.rem_euclid(view.columns() as i64);
        view.value_at(source_row, source_col).cloned()
    }
}
