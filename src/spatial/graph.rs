//! Grid graph mapping locations to stored values
//!
//! Cells live in an arena of parallel location and value tables, indexed by
//! row and then column. Registration always writes both tables together, so
//! every indexed location has a value. The original pattern fixes the initial
//! footprint; an [`Expansion`] strategy may register further cells when a
//! lookup misses, which lets searches run over unbounded planes.

use std::cell::RefCell;
use std::collections::BTreeMap;

use log::{debug, trace};
use ndarray::Array2;

use crate::io::configuration::UNREGISTERED_SYMBOL;
use crate::io::error::{LatticeError, Result, location_not_found};
use crate::spatial::coordinate::GridLocation;
use crate::spatial::extension::{CellLookup, Expansion, GridView, NoExpansion};

/// Inclusive rectangle of rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    /// Smallest row (inclusive)
    pub min_row: i64,
    /// Largest row (inclusive)
    pub max_row: i64,
    /// Smallest column (inclusive)
    pub min_col: i64,
    /// Largest column (inclusive)
    pub max_col: i64,
}

impl GridBounds {
    /// Check if a row and column fall inside the rectangle
    pub const fn contains(&self, row: i64, col: i64) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// Number of rows spanned, saturating at `usize::MAX`
    pub const fn rows(&self) -> usize {
        span(self.min_row, self.max_row)
    }

    /// Number of columns spanned, saturating at `usize::MAX`
    pub const fn columns(&self) -> usize {
        span(self.min_col, self.max_col)
    }
}

const fn span(min: i64, max: i64) -> usize {
    (max.abs_diff(min) as usize).saturating_add(1)
}

/// Location produced by `factory` for a row and column, if it names that cell
fn place<L, F>(factory: &F, row: i64, col: i64) -> Result<L>
where
    L: GridLocation,
    F: Fn(i64, i64) -> L + ?Sized,
{
    let location = factory(row, col);
    if location.row() == row && location.col() == col {
        Ok(location)
    } else {
        Err(LatticeError::MisplacedLocation {
            row,
            col,
            found_row: location.row(),
            found_col: location.col(),
        })
    }
}

/// Arena of registered cells
#[derive(Debug)]
struct CellStore<L, V> {
    locations: Vec<L>,
    values: Vec<V>,
    index: BTreeMap<i64, BTreeMap<i64, usize>>,
}

impl<L, V> Default for CellStore<L, V> {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            values: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<L: GridLocation, V> CellStore<L, V> {
    fn slot(&self, row: i64, col: i64) -> Option<usize> {
        self.index
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
    }

    fn location(&self, row: i64, col: i64) -> Option<L> {
        self.slot(row, col)
            .and_then(|slot| self.locations.get(slot))
            .copied()
    }

    /// Slot of a registered location, matching on identity as well as position
    fn slot_of(&self, location: &L) -> Option<usize> {
        self.slot(location.row(), location.col())
            .filter(|&slot| self.locations.get(slot) == Some(location))
    }

    /// Register a cell unless its position is already taken
    fn insert(&mut self, location: L, value: V) -> L {
        let (row, col) = (location.row(), location.col());
        if let Some(resident) = self.location(row, col) {
            return resident;
        }
        let slot = self.locations.len();
        self.locations.push(location);
        self.values.push(value);
        self.index.entry(row).or_default().insert(col, slot);
        location
    }

    fn row_locations(&self, row: i64) -> Vec<L> {
        self.index.get(&row).map_or_else(Vec::new, |cols| {
            cols.values()
                .filter_map(|&slot| self.locations.get(slot).copied())
                .collect()
        })
    }

    fn all_locations(&self) -> Vec<L> {
        self.index
            .values()
            .flat_map(BTreeMap::values)
            .filter_map(|&slot| self.locations.get(slot).copied())
            .collect()
    }

    fn bounds(&self) -> Option<GridBounds> {
        let min_row = *self.index.keys().next()?;
        let max_row = *self.index.keys().next_back()?;
        let min_col = self
            .index
            .values()
            .filter_map(|cols| cols.keys().next())
            .min()?;
        let max_col = self
            .index
            .values()
            .filter_map(|cols| cols.keys().next_back())
            .max()?;

        Some(GridBounds {
            min_row,
            max_row,
            min_col: *min_col,
            max_col: *max_col,
        })
    }
}

impl<L: GridLocation, V> CellLookup<V> for CellStore<L, V> {
    fn value_at(&self, row: i64, col: i64) -> Option<&V> {
        self.slot(row, col).and_then(|slot| self.values.get(slot))
    }
}

/// Mutable container mapping grid locations to values
///
/// Lookups take `&self` even though a miss may register an expanded cell; the
/// arena sits behind a `RefCell` whose borrows never outlive a single method.
/// The grid is therefore single-threaded and not `Sync`.
pub struct GridGraph<L, V> {
    rows: usize,
    columns: usize,
    store: RefCell<CellStore<L, V>>,
    factory: Box<dyn Fn(i64, i64) -> L>,
    expansion: Box<dyn Expansion<V>>,
}

impl<L: GridLocation, V> GridGraph<L, V> {
    /// Build a grid from rows of symbols
    ///
    /// Every `(row, col)` of the pattern gets the location produced by
    /// `factory` and the value produced by `decode` for its symbol. The
    /// factory must return locations whose [`GridLocation::row`] and
    /// [`GridLocation::col`] match its arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern has no rows
    /// - A row's length differs from the first row's length
    /// - The factory names a different cell than the one requested
    pub fn new<S, F, D>(pattern: &[S], factory: F, decode: D) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(i64, i64) -> L + 'static,
        D: Fn(char) -> V,
    {
        let first = pattern.first().ok_or(LatticeError::EmptyPattern)?;
        let columns = first.as_ref().chars().count();

        let mut store = CellStore::default();
        for (row, line) in pattern.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != columns {
                return Err(LatticeError::RaggedPattern {
                    row,
                    expected: columns,
                    found: width,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let location = place(&factory, row as i64, col as i64)?;
                store.insert(location, decode(symbol));
            }
        }

        debug!("built {}x{columns} grid graph", pattern.len());

        Ok(Self {
            rows: pattern.len(),
            columns,
            store: RefCell::new(store),
            factory: Box::new(factory),
            expansion: Box::new(NoExpansion),
        })
    }

    /// Replace the expansion strategy consulted on lookup misses
    #[must_use]
    pub fn with_expansion<E>(mut self, expansion: E) -> Self
    where
        E: Expansion<V> + 'static,
    {
        self.expansion = Box::new(expansion);
        self
    }

    /// Row count of the original pattern
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Column count of the original pattern
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of registered cells
    pub fn len(&self) -> usize {
        self.store.borrow().locations.len()
    }

    /// Check if no cell is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a location is registered, without consulting the expansion
    pub fn contains(&self, location: &L) -> bool {
        self.store.borrow().slot_of(location).is_some()
    }

    /// Location at a row and column, expanding the grid if the strategy allows
    pub fn location_or_none(&self, row: i64, col: i64) -> Option<L> {
        let resident = self.store.borrow().location(row, col);
        resident.or_else(|| self.expand(row, col))
    }

    /// Location at a row and column
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::LocationNotFound`] if no cell exists there after
    /// the expansion strategy was consulted
    pub fn location(&self, row: i64, col: i64) -> Result<L> {
        self.location_or_none(row, col)
            .ok_or_else(|| location_not_found(row, col))
    }

    fn expand(&self, row: i64, col: i64) -> Option<L> {
        let location = place(&*self.factory, row, col)
            .inspect_err(|error| trace!("refused expansion: {error}"))
            .ok()?;
        let value = {
            let store = self.store.borrow();
            let view = GridView::new(self.rows, self.columns, &*store);
            self.expansion.expand(row, col, &view)
        }?;

        trace!("expanded grid graph to row {row}, column {col}");
        Some(self.store.borrow_mut().insert(location, value))
    }

    /// Every cell inside `bounds` that exists or that the expansion allows
    ///
    /// Missing cells are registered exactly as individual lookups would.
    pub fn locations_within(&self, bounds: GridBounds) -> Vec<L> {
        (bounds.min_row..=bounds.max_row)
            .flat_map(|row| {
                (bounds.min_col..=bounds.max_col)
                    .filter_map(move |col| self.location_or_none(row, col))
            })
            .collect()
    }

    /// Register a cell at a row and column using the grid's location factory
    ///
    /// Idempotent: if the position is taken the resident location is returned
    /// and `value` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::MisplacedLocation`] if the factory names a
    /// different cell; nothing is registered in that case
    pub fn add_location_at(&mut self, row: i64, col: i64, value: V) -> Result<L> {
        let store = self.store.get_mut();
        if let Some(resident) = store.location(row, col) {
            return Ok(resident);
        }
        let location = place(&*self.factory, row, col)?;
        Ok(store.insert(location, value))
    }

    /// Register an existing location at its own row and column
    ///
    /// Idempotent: if the position is taken the resident location is returned
    /// and `value` is discarded.
    pub fn add_location(&mut self, location: L, value: V) -> L {
        self.store.get_mut().insert(location, value)
    }

    /// All registered locations in row-major order
    pub fn all_locations(&self) -> Vec<L> {
        self.store.borrow().all_locations()
    }

    /// Registered locations of one row, empty for unknown rows
    pub fn row_locations(&self, row: i64) -> Vec<L> {
        self.store.borrow().row_locations(row)
    }

    /// Value stored at a location
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::LocationNotFound`] if the location is not registered
    pub fn get(&self, location: &L) -> Result<V>
    where
        V: Clone,
    {
        let store = self.store.borrow();
        store
            .slot_of(location)
            .and_then(|slot| store.values.get(slot))
            .cloned()
            .ok_or_else(|| location_not_found(location.row(), location.col()))
    }

    /// Value stored at a location, or `default` if it is not registered
    pub fn get_or_default(&self, location: &L, default: V) -> V
    where
        V: Clone,
    {
        self.get(location).unwrap_or(default)
    }

    /// Replace the value stored at a location, returning the previous value
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::LocationNotFound`] if the location is not registered
    pub fn set(&mut self, location: &L, value: V) -> Result<V> {
        let store = self.store.get_mut();
        let slot = store
            .slot_of(location)
            .ok_or_else(|| location_not_found(location.row(), location.col()))?;
        store
            .values
            .get_mut(slot)
            .map(|stored| std::mem::replace(stored, value))
            .ok_or_else(|| location_not_found(location.row(), location.col()))
    }

    /// Exchange the values stored at two locations
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::LocationNotFound`] if either location is not
    /// registered; no value moves in that case
    pub fn swap(&mut self, a: &L, b: &L) -> Result<()> {
        let store = self.store.get_mut();
        let first = store
            .slot_of(a)
            .ok_or_else(|| location_not_found(a.row(), a.col()))?;
        let second = store
            .slot_of(b)
            .ok_or_else(|| location_not_found(b.row(), b.col()))?;
        store.values.swap(first, second);
        Ok(())
    }

    /// Bounding rectangle of every registered cell
    pub fn bounds(&self) -> Option<GridBounds> {
        self.store.borrow().bounds()
    }

    /// Rows spanned by registered cells, including expanded ones
    pub fn expanded_total_rows(&self) -> usize {
        self.bounds().map_or(0, |bounds| bounds.rows())
    }

    /// Columns spanned by registered cells, including expanded ones
    pub fn expanded_total_columns(&self) -> usize {
        self.bounds().map_or(0, |bounds| bounds.columns())
    }

    /// Dense snapshot of the bounding rectangle
    ///
    /// Element `[i, j]` holds the cell at `(min_row + i, min_col + j)`;
    /// unregistered cells hold `default`. Empty grids give a `0x0` array.
    /// The whole rectangle is allocated, so sparse grids spread over distant
    /// rows or columns are better read through [`Self::all_locations`].
    pub fn to_array(&self, default: V) -> Array2<V>
    where
        V: Clone,
    {
        self.dense(default, Clone::clone)
    }

    fn dense<T, F>(&self, fill: T, transform: F) -> Array2<T>
    where
        T: Clone,
        F: Fn(&V) -> T,
    {
        let store = self.store.borrow();
        let Some(bounds) = store.bounds() else {
            return Array2::from_elem((0, 0), fill);
        };

        let mut array = Array2::from_elem((bounds.rows(), bounds.columns()), fill);
        for (&row, cols) in &store.index {
            for (&col, &slot) in cols {
                let index = [
                    row.abs_diff(bounds.min_row) as usize,
                    col.abs_diff(bounds.min_col) as usize,
                ];
                if let (Some(value), Some(cell)) = (store.values.get(slot), array.get_mut(index)) {
                    *cell = transform(value);
                }
            }
        }
        array
    }

    /// Render the original footprint, one line per row
    pub fn grid_to_string<F>(&self, transform: F) -> String
    where
        F: Fn(&V) -> char,
    {
        let store = self.store.borrow();
        (0..self.rows as i64)
            .map(|row| {
                (0..self.columns as i64)
                    .map(|col| {
                        store
                            .value_at(row, col)
                            .map_or(UNREGISTERED_SYMBOL, &transform)
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the bounding rectangle of all registered cells
    ///
    /// Positions inside the rectangle without a cell are drawn as `default`.
    pub fn expanded_grid_to_string<F>(&self, transform: F, default: char) -> String
    where
        F: Fn(&V) -> char,
    {
        self.dense(default, transform)
            .rows()
            .into_iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Verify that the row index and the value table describe the same cells
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InconsistentGrid`] describing the first mismatch
    pub fn check_consistency(&self) -> Result<()> {
        let store = self.store.borrow();
        let inconsistent = |reason: String| Err(LatticeError::InconsistentGrid { reason });

        if store.locations.len() != store.values.len() {
            return inconsistent(format!(
                "{} locations but {} values",
                store.locations.len(),
                store.values.len()
            ));
        }

        let indexed: usize = store.index.values().map(BTreeMap::len).sum();
        if indexed != store.locations.len() {
            return inconsistent(format!(
                "{indexed} indexed cells but {} registered locations",
                store.locations.len()
            ));
        }

        for (&row, cols) in &store.index {
            if cols.is_empty() {
                return inconsistent(format!("row {row} is indexed without cells"));
            }
            for (&col, &slot) in cols {
                match store.locations.get(slot) {
                    Some(location) if location.row() == row && location.col() == col => {}
                    Some(location) => {
                        return inconsistent(format!(
                            "location {location:?} indexed at row {row}, column {col}"
                        ));
                    }
                    None => {
                        return inconsistent(format!(
                            "row {row}, column {col} points at missing slot {slot}"
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
