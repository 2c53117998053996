//! Tests for direction offsets, opposites, and the omnidirectional partition

#[cfg(test)]
mod tests {
    use gridlattice::spatial::direction::{Cardinal, Direction, DirectionClass, Omni, Ordinal};
    use std::collections::HashSet;

    fn offsets<D: Direction>() -> HashSet<(i64, i64)> {
        D::ALL.iter().map(|direction| direction.offset()).collect()
    }

    // Tests offsets are pairwise distinct within each set
    // Verified by giving TopLeft the TopRight offset
    #[test]
    fn test_offsets_are_distinct() {
        assert_eq!(offsets::<Cardinal>().len(), 4);
        assert_eq!(offsets::<Ordinal>().len(), 4);
        assert_eq!(offsets::<Omni>().len(), 8);
    }

    // Tests the offset rules of each set
    // Verified by making a cardinal offset move diagonally
    #[test]
    fn test_offset_rules() {
        for direction in Cardinal::ALL {
            let (d_row, d_col) = direction.offset();
            assert_eq!(
                d_row.abs() + d_col.abs(),
                1,
                "{direction:?} must move one axis"
            );
        }
        for direction in Ordinal::ALL {
            let (d_row, d_col) = direction.offset();
            assert_eq!(
                (d_row.abs(), d_col.abs()),
                (1, 1),
                "{direction:?} must be diagonal"
            );
        }
        assert_eq!(Cardinal::Right.offset(), (0, 1));
        assert_eq!(Cardinal::Top.offset(), (-1, 0));
        assert_eq!(Ordinal::BottomLeft.offset(), (1, -1));
    }

    // Tests omni offsets agree with the subsets they embed
    // Verified by mapping Omni::Left to Cardinal::Right
    #[test]
    fn test_omni_embeds_subsets() {
        for &direction in Cardinal::ALL {
            let omni = Omni::from(direction);
            assert_eq!(omni.offset(), direction.offset());
            assert_eq!(omni.as_cardinal(), Some(direction));
            assert_eq!(omni.as_ordinal(), None);
        }
        for &direction in Ordinal::ALL {
            let omni = Omni::from(direction);
            assert_eq!(omni.offset(), direction.offset());
            assert_eq!(omni.as_ordinal(), Some(direction));
            assert_eq!(omni.as_cardinal(), None);
        }
    }

    // Tests the fixed four plus four partition
    // Verified by classing TopRight as cardinal
    #[test]
    fn test_omni_partition() {
        let cardinal: Vec<Omni> = Omni::of_class(DirectionClass::Cardinal).collect();
        let ordinal: Vec<Omni> = Omni::of_class(DirectionClass::Ordinal).collect();

        assert_eq!(
            cardinal,
            vec![Omni::Top, Omni::Right, Omni::Bottom, Omni::Left]
        );
        assert_eq!(
            ordinal,
            vec![
                Omni::TopRight,
                Omni::BottomRight,
                Omni::BottomLeft,
                Omni::TopLeft
            ]
        );
        for direction in Cardinal::ALL {
            assert_eq!(direction.class(), DirectionClass::Cardinal);
        }
        for direction in Ordinal::ALL {
            assert_eq!(direction.class(), DirectionClass::Ordinal);
        }
    }

    // Tests opposites negate offsets and are involutions
    // Verified by returning self from Ordinal::opposite
    #[test]
    fn test_opposites() {
        fn check<D: Direction>() {
            for &direction in D::ALL {
                let (d_row, d_col) = direction.offset();
                assert_eq!(direction.opposite().offset(), (-d_row, -d_col));
                assert_eq!(direction.opposite().opposite(), direction);
            }
        }
        check::<Cardinal>();
        check::<Ordinal>();
        check::<Omni>();
    }

    // Tests reverse lookup from offsets
    // Verified by searching only the first half of ALL
    #[test]
    fn test_from_offset() {
        assert_eq!(Cardinal::from_offset(0, -1), Some(Cardinal::Left));
        assert_eq!(Cardinal::from_offset(1, 1), None);
        assert_eq!(Ordinal::from_offset(-1, -1), Some(Ordinal::TopLeft));
        assert_eq!(Ordinal::from_offset(0, 1), None);
        assert_eq!(Omni::from_offset(1, 1), Some(Omni::BottomRight));
        assert_eq!(Omni::from_offset(0, 0), None);
        assert_eq!(Omni::from_offset(2, 0), None);
    }

    // Tests quarter turns cycle through all four cardinal directions
    // Verified by swapping Right and Left in clockwise
    #[test]
    fn test_cardinal_turns() {
        assert_eq!(Cardinal::Top.clockwise(), Cardinal::Right);
        assert_eq!(Cardinal::Top.counter_clockwise(), Cardinal::Left);
        for &direction in Cardinal::ALL {
            assert_eq!(direction.clockwise().counter_clockwise(), direction);
            assert_eq!(
                direction.clockwise().clockwise().clockwise().clockwise(),
                direction
            );
        }
    }
}
