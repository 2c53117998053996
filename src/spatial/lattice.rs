//! Neighbour traversal over a grid graph restricted to one direction set
//!
//! A single [`Lattice`] type serves all three capability layers; the
//! direction set is a type parameter. Neighbours are looked up afresh on every
//! call, so an expanding grid grows as traversal reaches past its edge.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::io::error::{Result, location_not_found};
use crate::spatial::coordinate::GridLocation;
use crate::spatial::direction::{Cardinal, Direction, DirectionClass, Omni, Ordinal};
use crate::spatial::extension::Expansion;
use crate::spatial::graph::GridGraph;

/// Grid graph with neighbour operations over the direction set `D`
pub struct Lattice<D, L, V> {
    graph: GridGraph<L, V>,
    directions: PhantomData<D>,
}

/// Lattice stepping along rows and columns only
pub type CardinalLattice<L, V> = Lattice<Cardinal, L, V>;

/// Lattice stepping diagonally only
pub type DiagonalLattice<L, V> = Lattice<Ordinal, L, V>;

/// Lattice stepping in all eight directions
pub type OmniLattice<L, V> = Lattice<Omni, L, V>;

impl<D: Direction, L: GridLocation, V> Lattice<D, L, V> {
    /// Build a lattice from rows of symbols
    ///
    /// See [`GridGraph::new`] for the meaning of `factory` and `decode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or ragged, or if the factory
    /// names a different cell than the one requested
    pub fn new<S, F, T>(pattern: &[S], factory: F, decode: T) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(i64, i64) -> L + 'static,
        T: Fn(char) -> V,
    {
        GridGraph::new(pattern, factory, decode)
            .map(Self::from_graph)
    }

    /// Add neighbour traversal to an existing grid graph
    pub const fn from_graph(graph: GridGraph<L, V>) -> Self {
        Self {
            graph,
            directions: PhantomData,
        }
    }

    /// Replace the expansion strategy of the underlying graph
    #[must_use]
    pub fn with_expansion<E>(self, expansion: E) -> Self
    where
        E: Expansion<V> + 'static,
    {
        Self::from_graph(self.graph.with_expansion(expansion))
    }

    /// Underlying grid graph
    pub const fn graph(&self) -> &GridGraph<L, V> {
        &self.graph
    }

    /// Give up neighbour traversal and keep the grid graph
    pub fn into_graph(self) -> GridGraph<L, V> {
        self.graph
    }

    /// Neighbour one step away in `direction`, if that cell exists
    ///
    /// Steps off the edge of the `i64` plane have no neighbour.
    pub fn neighbour_or_none(&self, location: &L, direction: D) -> Option<L> {
        let (row, col) = step(location, direction)?;
        self.graph.location_or_none(row, col)
    }

    /// Neighbour one step away in `direction`
    ///
    /// # Errors
    ///
    /// Returns [`crate::LatticeError::LocationNotFound`] naming the missing cell,
    /// clamped to the `i64` range for steps off the edge of the plane
    pub fn neighbour(&self, location: &L, direction: D) -> Result<L> {
        let (d_row, d_col) = direction.offset();
        let row = location.row().saturating_add(d_row);
        let col = location.col().saturating_add(d_col);
        self.neighbour_or_none(location, direction)
            .ok_or_else(|| location_not_found(row, col))
    }

    /// Every existing neighbour, in the set's direction order
    pub fn all_neighbours(&self, location: &L) -> Vec<L> {
        D::ALL
            .iter()
            .filter_map(|&direction| self.neighbour_or_none(location, direction))
            .collect()
    }

    /// Existing neighbours keyed by the direction that reaches them
    pub fn all_neighbours_with_direction(&self, location: &L) -> BTreeMap<D, L> {
        self.neighbours_where(location, |_| true)
    }

    fn neighbours_where<P>(&self, location: &L, keep: P) -> BTreeMap<D, L>
    where
        P: Fn(D) -> bool,
    {
        D::ALL
            .iter()
            .copied()
            .filter(|&direction| keep(direction))
            .filter_map(|direction| {
                self.neighbour_or_none(location, direction)
                    .map(|neighbour| (direction, neighbour))
            })
            .collect()
    }

    /// Direction leading from `location` to an adjacent `target`
    ///
    /// `None` when `target` is not one step away in any direction of the set.
    pub fn direction_to_neighbour_or_none(&self, location: &L, target: &L) -> Option<D> {
        let d_row = target.row().checked_sub(location.row())?;
        let d_col = target.col().checked_sub(location.col())?;
        let direction = D::from_offset(d_row, d_col)?;
        (self.neighbour_or_none(location, direction).as_ref() == Some(target))
            .then_some(direction)
    }

    /// Lazy walk from `start` (inclusive) repeatedly stepping in `direction`
    ///
    /// The walk ends at the first step without a neighbour. On a grid whose
    /// expansion always succeeds it never ends, so bound consumption with
    /// `take` or `take_while`.
    pub fn locations_in_direction(
        &self,
        start: L,
        direction: D,
    ) -> LocationsInDirection<'_, D, L, V> {
        LocationsInDirection {
            lattice: self,
            current: Some(start),
            started: false,
            direction,
        }
    }

    /// One lazy walk per direction of the set
    pub fn locations_in_all_directions(
        &self,
        start: L,
    ) -> BTreeMap<D, LocationsInDirection<'_, D, L, V>> {
        D::ALL
            .iter()
            .map(|&direction| {
                let walk = self.locations_in_direction(start, direction);
                (direction, walk)
            })
            .collect()
    }
}

impl<L: GridLocation, V> Lattice<Omni, L, V> {
    /// Existing neighbours along rows and columns
    pub fn cardinal_neighbours(&self, location: &L) -> Vec<L> {
        self.cardinal_neighbours_with_direction(location)
            .into_values()
            .collect()
    }

    /// Existing diagonal neighbours
    pub fn ordinal_neighbours(&self, location: &L) -> Vec<L> {
        self.ordinal_neighbours_with_direction(location)
            .into_values()
            .collect()
    }

    /// Existing neighbours along rows and columns, keyed by direction
    pub fn cardinal_neighbours_with_direction(&self, location: &L) -> BTreeMap<Omni, L> {
        self.neighbours_where(location, |direction| {
            direction.class() == DirectionClass::Cardinal
        })
    }

    /// Existing diagonal neighbours, keyed by direction
    pub fn ordinal_neighbours_with_direction(&self, location: &L) -> BTreeMap<Omni, L> {
        self.neighbours_where(location, |direction| {
            direction.class() == DirectionClass::Ordinal
        })
    }
}

/// Row and column one step from `location`, if both stay within `i64`
fn step<D: Direction, L: GridLocation>(location: &L, direction: D) -> Option<(i64, i64)> {
    let (d_row, d_col) = direction.offset();
    let row = location.row().checked_add(d_row)?;
    let col = location.col().checked_add(d_col)?;
    Some((row, col))
}

impl<D, L, V> Deref for Lattice<D, L, V> {
    type Target = GridGraph<L, V>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<D, L, V> DerefMut for Lattice<D, L, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.graph
    }
}

/// Pull-based walk in one direction, created by [`Lattice::locations_in_direction`]
///
/// Holds only the most recent location, so memory stays constant however far
/// the walk runs. Each step is looked up when it is pulled, never ahead of
/// time. Calling `locations_in_direction` again restarts from the original
/// start.
pub struct LocationsInDirection<'a, D, L, V> {
    lattice: &'a Lattice<D, L, V>,
    current: Option<L>,
    started: bool,
    direction: D,
}

impl<D: Direction, L: GridLocation, V> Iterator for LocationsInDirection<'_, D, L, V> {
    type Item = L;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            let current = self.current?;
            self.current = self.lattice.neighbour_or_none(&current, self.direction);
        } else {
            self.started = true;
        }
        self.current
    }
}

impl<D: Direction, L: GridLocation, V> std::iter::FusedIterator
    for LocationsInDirection<'_, D, L, V>
{
}
