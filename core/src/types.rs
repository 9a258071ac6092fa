use core::ops::RangeInclusive;

/// Single coordinate axis, used for the grid side length and for positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, both 0-based.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a square field with `side` cells per side.
pub const fn area(side: Coord) -> CellCount {
    // 255 * 255 still fits
    (side as CellCount) * (side as CellCount)
}

/// ndarray index of `(row, col)`.
pub(crate) fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

/// Cells touching `center` on a square field of side `size`, in row-major
/// order and without `center` itself.
///
/// `center` must lie on the field.
pub fn neighbors(center: Coord2, size: Coord) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let cols = clipped_span(col, size);
    clipped_span(row, size)
        .flat_map(move |r| cols.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}

fn clipped_span(at: Coord, size: Coord) -> RangeInclusive<Coord> {
    let last = size.saturating_sub(1);
    at.saturating_sub(1)..=at.saturating_add(1).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn around(center: Coord2, size: Coord) -> Vec<Coord2> {
        neighbors(center, size).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(around((0, 0), 9), [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(around((8, 8), 9), [(7, 7), (7, 8), (8, 7)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(around((0, 4), 9).len(), 5);
        assert_eq!(around((4, 8), 9).len(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_excluding_center() {
        let found = around((4, 4), 9);
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(4, 4)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(around((0, 0), 1).is_empty());
    }

    #[test]
    fn last_cell_of_widest_grid_stays_in_bounds() {
        let last = Coord::MAX - 1;
        assert_eq!(
            around((last, last), Coord::MAX),
            [(last - 1, last - 1), (last - 1, last), (last, last - 1)]
        );
    }

    #[test]
    fn area_covers_widest_grid() {
        assert_eq!(area(9), 81);
        assert_eq!(area(Coord::MAX), 65025);
    }
}
