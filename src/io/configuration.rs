//! Rendering symbols and command-line defaults

// Rendering
/// Symbol drawn for a position inside the original footprint that has no cell
pub const UNREGISTERED_SYMBOL: char = ' ';
/// Symbol drawn for positions of an expanded rectangle without a cell
pub const EXPANDED_GAP_SYMBOL: char = ' ';
/// Symbol marking cells of a flood-filled region
pub const REGION_SYMBOL: char = '*';

// Safety limits for expanding grids
/// Largest pattern repetition accepted on the command line
pub const MAX_REPEAT: usize = 64;
/// Step limit applied to region searches on expanding grids
pub const DEFAULT_STEP_LIMIT: usize = 10_000;
