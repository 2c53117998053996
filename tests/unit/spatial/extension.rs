//! Tests for expansion strategies consulted on lookup misses

#[cfg(test)]
mod tests {
    use gridlattice::spatial::coordinate::Coordinate;
    use gridlattice::spatial::extension::{Fill, GridView, NoExpansion, Tiled};
    use gridlattice::spatial::graph::{GridBounds, GridGraph};

    type Location = Coordinate<i64>;

    fn square() -> GridGraph<Location, char> {
        GridGraph::new(&["ab", "cd"], Coordinate::new, |symbol| symbol)
            .unwrap()
    }

    fn mirror_column_zero(row: i64, col: i64, view: &GridView<'_, char>) -> Option<char> {
        if col == -1 && row >= 0 && (row as usize) < view.rows() {
            view.value_at(row, 0).copied()
        } else {
            None
        }
    }

    // Tests the default grid never grows
    // Verified by returning a padding value from NoExpansion
    #[test]
    fn test_no_expansion() {
        let grid = square().with_expansion(NoExpansion);
        assert_eq!(grid.location_or_none(5, 5), None);
        assert_eq!(grid.len(), 4);
    }

    // Tests bounded fill only registers cells inside its window
    // Verified by ignoring the window in Fill
    #[test]
    fn test_fill_within_window() {
        let window = GridBounds {
            min_row: -1,
            max_row: 2,
            min_col: 0,
            max_col: 1,
        };
        let grid = square().with_expansion(Fill::within('.', window));

        assert_eq!(grid.location_or_none(-1, 1), Some(Coordinate::new(-1, 1)));
        assert_eq!(grid.get(&Coordinate::new(-1, 1)).ok(), Some('.'));
        assert_eq!(grid.location_or_none(-2, 1), None);
        assert_eq!(grid.location_or_none(0, 2), None);
        assert_eq!(grid.len(), 5);
    }

    // Tests tiling copies values from the wrapped original position
    // Verified by using the remainder operator instead of rem_euclid
    #[test]
    fn test_tiled_wraps_negative_positions() {
        let grid = square().with_expansion(Tiled::new());

        let cases = [
            ((2, 0), 'a'),
            ((-1, -1), 'd'),
            ((-2, 3), 'b'),
            ((5, -4), 'c'),
        ];
        for ((row, col), expected) in cases {
            let location = grid.location(row, col).unwrap();
            assert_eq!(
                grid.get(&location).ok(),
                Some(expected),
                "at ({row}, {col})"
            );
        }
        assert!(grid.check_consistency().is_ok());
    }

    // Tests repeated tiling stops after the requested number of copies
    // Verified by omitting the trailing copy from the window
    #[test]
    fn test_tiled_repeated_window() {
        let grid = square().with_expansion(Tiled::repeated(2, 2, 1));

        assert!(grid.location_or_none(-2, -2).is_some());
        assert!(grid.location_or_none(3, 3).is_some());
        assert_eq!(grid.location_or_none(-3, 0), None);
        assert_eq!(grid.location_or_none(0, 4), None);

        let original_only = square().with_expansion(Tiled::repeated(2, 2, 0));
        assert_eq!(original_only.location_or_none(2, 0), None);
    }

    // Tests the repeated window is exposed and saturates for huge repetitions
    // Verified by computing the window edges with unchecked arithmetic
    #[test]
    fn test_tiled_repeated_extremes() {
        assert_eq!(Tiled::new().window(), None);
        assert_eq!(
            Tiled::repeated(2, 3, 1).window(),
            Some(GridBounds {
                min_row: -2,
                max_row: 3,
                min_col: -3,
                max_col: 5,
            })
        );

        let tiling = Tiled::repeated(2, 2, usize::MAX);
        assert_eq!(
            tiling.window(),
            Some(GridBounds {
                min_row: -i64::MAX,
                max_row: i64::MAX - 1,
                min_col: -i64::MAX,
                max_col: i64::MAX - 1,
            })
        );

        let grid = square().with_expansion(tiling);
        let far = grid.location(i64::MIN + 1, 0).unwrap();
        assert_eq!(grid.get(&far).ok(), Some('c'));
        assert_eq!(grid.location_or_none(i64::MIN, 0), None);
    }

    // Tests tiling an explicit window
    // Verified by treating max bounds as exclusive
    #[test]
    fn test_tiled_within() {
        let window = GridBounds {
            min_row: 0,
            max_row: 1,
            min_col: 0,
            max_col: 2,
        };
        let grid = square().with_expansion(Tiled::within(window));

        assert_eq!(grid.location_or_none(1, 2), Some(Coordinate::new(1, 2)));
        assert_eq!(grid.get(&Coordinate::new(1, 2)).ok(), Some('c'));
        assert_eq!(grid.location_or_none(2, 2), None);
    }

    // Tests tiling a grid with no columns cannot invent values
    // Verified by dividing by the zero column count
    #[test]
    fn test_tiled_empty_pattern() {
        let grid: GridGraph<Location, char> =
            GridGraph::new(&[""], Coordinate::new, |symbol| symbol)
                .unwrap()
                .with_expansion(Tiled::new());
        assert_eq!(grid.location_or_none(0, 0), None);
        assert!(grid.is_empty());
    }

    // Tests custom strategies can read registered values through the view
    // Verified by reading from the requested position instead of column zero
    #[test]
    fn test_function_expansion_reads_view() {
        let grid = square().with_expansion(mirror_column_zero);

        assert_eq!(grid.location_or_none(1, -1), Some(Coordinate::new(1, -1)));
        assert_eq!(grid.get(&Coordinate::new(1, -1)).ok(), Some('c'));
        assert_eq!(grid.location_or_none(0, -2), None);
        assert_eq!(grid.location_or_none(4, -1), None);
    }
}
