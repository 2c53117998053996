//! Command-line interface for inspecting symbol patterns as lattices

use crate::algorithm::traversal::{flood_fill, step_distances};
use crate::io::configuration::{
    DEFAULT_STEP_LIMIT, EXPANDED_GAP_SYMBOL, MAX_REPEAT, REGION_SYMBOL,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::pattern::read_pattern;
use crate::spatial::coordinate::{Coordinate, GridLocation};
use crate::spatial::direction::{Cardinal, Direction, Omni, Ordinal};
use crate::spatial::extension::Tiled;
use crate::spatial::lattice::Lattice;
use clap::{ArgAction, Parser, ValueEnum};
use log::debug;
use std::collections::BTreeMap;
use std::convert::identity;
use std::path::PathBuf;

/// Direction set used for region searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Neighbourhood {
    /// Up, down, left, right
    Cardinal,
    /// The four diagonals
    Diagonal,
    /// All eight directions
    Omni,
}

#[derive(Parser)]
#[command(name = "gridlattice")]
#[command(
    author,
    version,
    about = "Inspect a symbol pattern as an expandable lattice"
)]
/// Command-line arguments for the pattern inspector
pub struct Cli {
    /// Pattern file: equal-length rows of symbols
    #[arg(value_name = "PATTERN")]
    pub target: PathBuf,

    /// Direction set used when searching regions
    #[arg(short, long, value_enum, default_value_t = Neighbourhood::Cardinal)]
    pub neighbourhood: Neighbourhood,

    /// Flood fill the region sharing this cell's symbol (ROW,COL)
    #[arg(short, long, value_name = "ROW,COL")]
    pub start: Option<Coordinate<i64>>,

    /// Stop the region search after this many steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Tile the pattern this many times around the original
    #[arg(short, long, default_value_t = 0)]
    pub repeat: usize,

    /// Append the grid with the region marked
    #[arg(long)]
    pub render: bool,

    /// Print only the numbers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log progress to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Builds a lattice from the CLI target and reports on it
pub struct Inspector {
    cli: Cli,
}

impl Inspector {
    /// Create an inspector for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Produce the report text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repeat count exceeds the supported maximum
    /// - The pattern file cannot be read or is not rectangular
    /// - The start cell does not exist
    pub fn run(&self) -> Result<String> {
        if self.cli.repeat > MAX_REPEAT {
            return Err(invalid_parameter(
                "repeat",
                &self.cli.repeat,
                &format!("must be at most {MAX_REPEAT}"),
            ));
        }

        let pattern = read_pattern(&self.cli.target)?;
        debug!(
            "inspecting '{}' with {:?} neighbourhood",
            self.cli.target.display(),
            self.cli.neighbourhood
        );

        match self.cli.neighbourhood {
            Neighbourhood::Cardinal => self.inspect::<Cardinal>(&pattern),
            Neighbourhood::Diagonal => self.inspect::<Ordinal>(&pattern),
            Neighbourhood::Omni => self.inspect::<Omni>(&pattern),
        }
    }

    fn inspect<D: Direction>(&self, pattern: &[String]) -> Result<String> {
        let mut lattice: Lattice<D, Coordinate<i64>, char> =
            Lattice::new(pattern, Coordinate::new, identity)?;
        let mut window = None;
        if self.cli.repeat > 0 {
            let tiling = Tiled::repeated(lattice.rows(), lattice.columns(), self.cli.repeat);
            window = tiling.window();
            lattice = lattice.with_expansion(tiling);
        }

        let mut report = Vec::new();
        if !self.cli.quiet {
            let symbols = Self::symbol_counts(&lattice);
            let rows = lattice.rows();
            let columns = lattice.columns();
            report.push(format!("size: {rows}x{columns}"));
            report.push(format!("symbols: {symbols}"));
        }

        let mut region = Vec::new();
        if let Some(start) = self.cli.start {
            let start = lattice.location(start.row(), start.col())?;
            let symbol = lattice.get(&start)?;
            region = self.region(&lattice, start, symbol)?;

            let size = region.len();
            let line = if self.cli.quiet {
                size.to_string()
            } else {
                format!("region: {size} cells of '{symbol}' from {start}")
            };
            report.push(line);
        }

        if self.cli.repeat > 0 && !self.cli.quiet {
            let rows = lattice.expanded_total_rows();
            let columns = lattice.expanded_total_columns();
            report.push(format!("expanded: {rows}x{columns}"));
        }

        if self.cli.render {
            // Tiles copy the original cells, so they are filled in before marking
            if let Some(window) = window {
                let tiled = lattice.locations_within(window).len();
                debug!("filled {tiled} cells of the tiled window for rendering");
            }
            for location in &region {
                lattice.set(location, REGION_SYMBOL)?;
            }

            let show = |symbol: &char| *symbol;
            let grid = if self.cli.repeat > 0 {
                lattice.expanded_grid_to_string(show, EXPANDED_GAP_SYMBOL)
            } else {
                lattice.grid_to_string(show)
            };
            report.push(grid);
        }

        report.push(String::new());
        Ok(report.join("\n"))
    }

    fn region<D: Direction>(
        &self,
        lattice: &Lattice<D, Coordinate<i64>, char>,
        start: Coordinate<i64>,
        symbol: char,
    ) -> Result<Vec<Coordinate<i64>>> {
        let same_symbol = |value: &char| *value == symbol;
        let limit = match (self.cli.steps, self.cli.repeat) {
            (Some(steps), _) => steps,
            (None, 0) => return flood_fill(lattice, start, same_symbol),
            (None, _) => DEFAULT_STEP_LIMIT,
        };

        let distances = step_distances(lattice, start, same_symbol, Some(limit))?;
        Ok(distances.into_keys().collect())
    }

    fn symbol_counts<D: Direction>(lattice: &Lattice<D, Coordinate<i64>, char>) -> String {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for location in lattice.all_locations() {
            if let Ok(symbol) = lattice.get(&location) {
                *counts.entry(symbol).or_default() += 1;
            }
        }
        counts
            .iter()
            .map(|(symbol, count)| format!("'{symbol}'={count}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
