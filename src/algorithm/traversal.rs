//! Breadth-first region searches over a lattice
//!
//! Searches follow whichever direction set the lattice carries and only enter
//! cells whose value satisfies the caller's predicate. On expanding grids each
//! neighbour lookup may register a new cell, so callers bound the search with
//! a step limit.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::io::error::Result;
use crate::spatial::coordinate::GridLocation;
use crate::spatial::direction::Direction;
use crate::spatial::lattice::Lattice;

/// Cells reachable from `start` through passable values, in visiting order
///
/// Returns an empty region when the start value is not passable.
///
/// # Errors
///
/// Returns [`crate::LatticeError::LocationNotFound`] if `start` is not registered
pub fn flood_fill<D, L, V, P>(lattice: &Lattice<D, L, V>, start: L, passable: P) -> Result<Vec<L>>
where
    D: Direction,
    L: GridLocation,
    V: Clone,
    P: Fn(&V) -> bool,
{
    let order = breadth_first(lattice, start, &passable, None)?;
    Ok(order.into_iter().map(|(location, _)| location).collect())
}

/// Fewest steps from `start` to every reachable passable cell
///
/// With `limit`, cells further than `limit` steps are neither entered nor
/// looked up, which keeps searches on expanding grids finite.
///
/// # Errors
///
/// Returns [`crate::LatticeError::LocationNotFound`] if `start` is not registered
pub fn step_distances<D, L, V, P>(
    lattice: &Lattice<D, L, V>,
    start: L,
    passable: P,
    limit: Option<usize>,
) -> Result<HashMap<L, usize>>
where
    D: Direction,
    L: GridLocation,
    V: Clone,
    P: Fn(&V) -> bool,
{
    let order = breadth_first(lattice, start, &passable, limit)?;
    Ok(order.into_iter().collect())
}

fn breadth_first<D, L, V, P>(
    lattice: &Lattice<D, L, V>,
    start: L,
    passable: &P,
    limit: Option<usize>,
) -> Result<Vec<(L, usize)>>
where
    D: Direction,
    L: GridLocation,
    V: Clone,
    P: Fn(&V) -> bool,
{
    let start_value = lattice.get(&start)?;
    if !passable(&start_value) {
        return Ok(Vec::new());
    }

    let mut visited = HashSet::from([start]);
    let mut order = vec![(start, 0)];
    let mut queue = VecDeque::from([(start, 0_usize)]);

    while let Some((current, steps)) = queue.pop_front() {
        if limit.is_some_and(|limit| steps >= limit) {
            continue;
        }
        for neighbour in lattice.all_neighbours(&current) {
            if visited.contains(&neighbour) {
                continue;
            }
            let enterable = lattice.get(&neighbour).is_ok_and(|value| passable(&value));
            if !enterable {
                continue;
            }
            visited.insert(neighbour);
            order.push((neighbour, steps + 1));
            queue.push_back((neighbour, steps + 1));
        }
    }

    debug!("breadth-first search reached {} cells", order.len());
    Ok(order)
}
