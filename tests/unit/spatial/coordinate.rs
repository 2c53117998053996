//! Tests for coordinate value semantics, parsing, and grid location mapping

#[cfg(test)]
mod tests {
    use gridlattice::LatticeError;
    use gridlattice::spatial::coordinate::{Coordinate, Coordinate3, GridLocation};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // Tests structural equality and hash consistency
    // Verified by deriving Hash from the first component only
    #[test]
    fn test_equal_components_give_equal_coordinates() {
        let a = Coordinate::new(3_i64, -7);
        let b = Coordinate::new(3_i64, -7);

        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1, "Equal coordinates must hash identically");

        assert_ne!(a, Coordinate::new(3, -6));
        assert_ne!(a, Coordinate::new(4, -7));
    }

    // Tests that parse inverts to_coordinate_list
    // Verified by swapping components in to_coordinate_list
    #[test]
    fn test_parse_round_trips_coordinate_list() {
        for coordinate in [
            Coordinate::new(0_i32, 0),
            Coordinate::new(-5, 12),
            Coordinate::new(i32::MAX, i32::MIN),
        ] {
            let parsed = Coordinate::parse(&coordinate.to_coordinate_list());
            assert_eq!(parsed.ok(), Some(coordinate));
        }

        let triple = Coordinate3::new(1_i64, -2, 3);
        assert_eq!(
            Coordinate3::parse(&triple.to_coordinate_list()).ok(),
            Some(triple)
        );
    }

    // Tests arity validation for pairs and triples
    // Verified by accepting slices longer than required
    #[test]
    fn test_parse_rejects_wrong_arity() {
        match Coordinate::parse(&[1, 2, 3]) {
            Err(LatticeError::InvalidArity { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => unreachable!("Expected InvalidArity, got {other:?}"),
        }

        assert!(matches!(
            Coordinate::<i32>::parse(&[]),
            Err(LatticeError::InvalidArity { found: 0, .. })
        ));
        assert!(matches!(
            Coordinate3::parse(&[1, 2]),
            Err(LatticeError::InvalidArity {
                expected: 3,
                found: 2
            })
        ));
    }

    // Tests batch parsing fails on the first malformed group
    // Verified by skipping malformed groups instead of failing
    #[test]
    fn test_parse_all_batches() {
        let parsed = Coordinate::parse_all([vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(parsed, vec![Coordinate::new(1, 2), Coordinate::new(3, 4)]);

        let result = Coordinate::parse_all([vec![1, 2], vec![3], vec![4, 5]]);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidArity { found: 1, .. })
        ));

        let triples = Coordinate3::parse_all([[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples.get(1).map(Coordinate3::z), Some(6));
    }

    // Tests comma separated text parsing
    // Verified by removing whitespace trimming
    #[test]
    fn test_from_str() {
        let parsed: Coordinate<i64> = " 3, -4 ".parse().unwrap();
        assert_eq!(parsed, Coordinate::new(3, -4));

        let triple: Coordinate3<i32> = "1,2,3".parse().unwrap();
        assert_eq!(triple, Coordinate3::new(1, 2, 3));

        assert!(matches!(
            "1,2,3".parse::<Coordinate<i64>>(),
            Err(LatticeError::InvalidArity {
                expected: 2,
                found: 3
            })
        ));

        match "x,2".parse::<Coordinate<i64>>() {
            Err(LatticeError::InvalidComponent { value, .. }) => assert_eq!(value, "x"),
            other => unreachable!("Expected InvalidComponent, got {other:?}"),
        }
    }

    // Tests that moving a coordinate yields a new instance
    // Verified by subtracting in Add
    #[test]
    fn test_arithmetic_and_distance() {
        let origin = Coordinate::new(2_i32, 3);
        let moved = origin.offset(1, -1);

        assert_eq!(origin, Coordinate::new(2, 3), "Original must be unchanged");
        assert_eq!(moved, Coordinate::new(3, 2));
        assert_eq!(origin + moved, Coordinate::new(5, 5));
        assert_eq!(moved - origin, Coordinate::new(1, -1));
        assert_eq!(origin.manhattan_distance(&Coordinate::new(-1, 7)), 7);

        let a = Coordinate3::new(0_i64, 0, 0);
        let b = Coordinate3::new(1, -2, 3);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b - b, a);
        assert_eq!(a + b, b);
    }

    // Tests grid location mapping uses x as row and y as column
    // Verified by swapping row and col in the macro
    #[test]
    fn test_grid_location_components() {
        let signed = Coordinate::new(-2_i32, 9);
        assert_eq!(signed.row(), -2);
        assert_eq!(signed.col(), 9);

        let unsigned = Coordinate::new(200_u8, 7);
        assert_eq!(unsigned.row(), 200);
        assert_eq!(unsigned.col(), 7);
    }

    // Tests display formatting
    // Verified by dropping the separator
    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Coordinate3::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    proptest! {
        // Tests equality follows the components and equal values hash alike
        // Verified by comparing only the first component in PartialEq
        #[test]
        fn test_equality_and_hash_follow_components(
            x in -3_i64..3,
            y in -3_i64..3,
            u in -3_i64..3,
            v in -3_i64..3,
        ) {
            let first = Coordinate::new(x, y);
            let second = Coordinate::new(u, v);

            prop_assert_eq!(first == second, (x, y) == (u, v));
            if first == second {
                prop_assert_eq!(hash_of(&first), hash_of(&second));
            }
        }

        // Tests text and component lists parse back to the same coordinate
        // Verified by reading the components in reverse order
        #[test]
        fn test_parse_round_trips_any_coordinate(x in any::<i64>(), y in any::<i64>()) {
            let coordinate = Coordinate::new(x, y);
            let text = format!("{x}, {y}");

            prop_assert_eq!(
                text.parse::<Coordinate<i64>>().ok(),
                Some(coordinate)
            );
            prop_assert_eq!(
                Coordinate::parse(&coordinate.to_coordinate_list()).ok(),
                Some(coordinate)
            );
        }
    }
}
