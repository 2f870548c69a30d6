//! Tests for coordinates and direction stepping

#[cfg(test)]
mod tests {
    use regionfill::spatial::{Coordinate, Direction};

    // Tests stepping off every edge of the grid is rejected
    // Verified by removing the upper bound check in neighbor
    #[test]
    fn test_neighbor_respects_bounds() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.neighbor(Direction::Up, 3), None);
        assert_eq!(corner.neighbor(Direction::Left, 3), None);
        assert_eq!(
            corner.neighbor(Direction::Down, 3),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(
            corner.neighbor(Direction::Right, 3),
            Some(Coordinate::new(0, 1))
        );

        let far = Coordinate::new(2, 2);
        assert_eq!(far.neighbor(Direction::Down, 3), None);
        assert_eq!(far.neighbor(Direction::Right, 3), None);
        assert_eq!(far.neighbor(Direction::Up, 3), Some(Coordinate::new(1, 2)));
        assert_eq!(far.neighbor(Direction::Left, 3), Some(Coordinate::new(2, 1)));

        let edge = Coordinate::new(usize::MAX, usize::MAX);
        assert_eq!(edge.neighbor(Direction::Down, usize::MAX), None);
        assert_eq!(edge.neighbor(Direction::Right, usize::MAX), None);
    }

    // Tests neighbour counts for corner, edge and interior cells
    // Verified by dropping the filter on out-of-range steps
    #[test]
    fn test_neighbors_counts() {
        assert_eq!(Coordinate::new(0, 0).neighbors(4).count(), 2);
        assert_eq!(Coordinate::new(0, 2).neighbors(4).count(), 3);
        assert_eq!(Coordinate::new(2, 2).neighbors(4).count(), 4);
        assert_eq!(Coordinate::new(0, 0).neighbors(1).count(), 0);
    }

    // Tests offsets agree with neighbor stepping
    // Verified by swapping Up and Down offsets
    #[test]
    fn test_direction_offsets_match_neighbor() {
        let center = Coordinate::new(1, 1);
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.offset();
            let stepped = center.neighbor(direction, 3);
            let expected = Coordinate::new(
                (1 + d_row).try_into().unwrap(),
                (1 + d_col).try_into().unwrap(),
            );
            assert_eq!(stepped, Some(expected));
            assert!(center.is_adjacent(expected));
        }
    }

    // Tests ordering is row-major like tuples
    // Verified by swapping field order in the struct
    #[test]
    fn test_coordinate_ordering_is_row_major() {
        let mut cells = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 3),
            Coordinate::new(0, 1),
        ];
        cells.sort();

        let tuples: Vec<(usize, usize)> = cells.into_iter().map(Into::into).collect();
        assert_eq!(tuples, vec![(0, 1), (0, 3), (1, 0)]);
    }

    // Tests adjacency excludes diagonals and identical cells
    // Verified by using Chebyshev distance in is_adjacent
    #[test]
    fn test_is_adjacent_excludes_diagonals() {
        let cell = Coordinate::new(2, 2);
        assert!(cell.is_adjacent(Coordinate::new(2, 3)));
        assert!(!cell.is_adjacent(Coordinate::new(3, 3)));
        assert!(!cell.is_adjacent(cell));
    }

    // Tests enumeration covers the square once in row-major order
    // Verified by swapping loop order in all
    #[test]
    fn test_all_enumerates_row_major() {
        let cells: Vec<Coordinate> = Coordinate::all(2).collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
        assert_eq!(Coordinate::new(1, 1).linear_index(2), 3);
        assert_eq!(Coordinate::all(0).count(), 0);
    }

    // Tests display matches tuple formatting
    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Coordinate::from((4, 5)), Coordinate::new(4, 5));
        assert_eq!(<[usize; 2]>::from(Coordinate::new(4, 5)), [4, 5]);
    }
}
