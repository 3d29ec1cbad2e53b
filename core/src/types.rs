use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` lies within the 3x3 block centered on `center`.
pub const fn in_zone(center: Coord2, coords: Coord2) -> bool {
    center.0.abs_diff(coords.0) <= 1 && center.1.abs_diff(coords.1) <= 1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    /// Like [`iter_neighbors`](Self::iter_neighbors) but also yields `index` itself, in row-major
    /// order.
    fn iter_zone(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, dim_to_size(self.dim()), &NEIGHBORS)
    }

    fn iter_zone(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, dim_to_size(self.dim()), &ZONE)
    }
}

fn dim_to_size((rows, cols): (usize, usize)) -> Coord2 {
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ZONE: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, deltas: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_clipped_at_corner() {
        let grid: Array2<bool> = Array2::default([3, 3]);
        let mut neighbors = grid.iter_neighbors((0, 0));

        assert_eq!(neighbors.next(), Some((0, 1)));
        assert_eq!(neighbors.next(), Some((1, 0)));
        assert_eq!(neighbors.next(), Some((1, 1)));
        assert_eq!(neighbors.next(), None);
    }

    #[test]
    fn neighbors_follow_row_major_delta_order() {
        let grid: Array2<bool> = Array2::default([3, 3]);
        let mut neighbors = grid.iter_neighbors((1, 1));

        assert_eq!(neighbors.next(), Some((0, 0)));
        assert_eq!(neighbors.next(), Some((0, 1)));
        assert_eq!(neighbors.next(), Some((0, 2)));
        assert_eq!(neighbors.next(), Some((1, 0)));
        assert_eq!(neighbors.next(), Some((1, 2)));
        assert_eq!(neighbors.nth(2), Some((2, 2)));
    }

    #[test]
    fn zone_includes_center() {
        let grid: Array2<bool> = Array2::default([1, 2]);

        assert_eq!(grid.iter_zone((0, 0)).count(), 2);
        assert_eq!(grid.iter_zone((0, 1)).nth(0), Some((0, 0)));
        assert!(in_zone((4, 4), (3, 5)));
        assert!(!in_zone((4, 4), (2, 4)));
    }
}
