use alloc::vec::Vec;

use super::*;

/// Moves every mine in the 3x3 block around `center` to free cells outside of it.
///
/// Mines are taken in neighborhood order and free cells in row-major order, pairing them up until
/// either runs out. Mines that find no free cell stay where they are. Returns how many mines moved.
pub fn relocate_from_zone(layout: &mut MineLayout, center: Coord2) -> CellCount {
    let zone_mines: Vec<Coord2> = layout
        .iter_zone(center)
        .filter(|&coords| layout[coords])
        .collect();

    if zone_mines.is_empty() {
        return 0;
    }

    let (rows, cols) = layout.size();
    let free_cells = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| !in_zone(center, coords) && !layout[coords])
        .collect::<Vec<_>>();

    let mut moved = 0;
    for (&from, &to) in zone_mines.iter().zip(&free_cells) {
        layout[from] = false;
        layout[to] = true;
        moved += 1;
    }

    if usize::from(moved) < zone_mines.len() {
        log::warn!(
            "Only relocated {} of {} mines around {:?}, not enough free cells",
            moved,
            zone_mines.len(),
            center
        );
    } else {
        log::debug!("Relocated {} mines away from {:?}", moved, center);
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> MineLayout {
        MineLayout::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn moves_zone_mines_to_first_free_cells() {
        let mut mines = layout((4, 4), &[(0, 0), (1, 1), (0, 2)]);

        let moved = relocate_from_zone(&mut mines, (0, 0));

        assert_eq!(moved, 2);
        assert_eq!(mines.mine_count(), 3);
        assert_eq!(mines.iter_mines().collect::<Vec<_>>(), [(0, 2), (0, 3), (1, 2)]);
    }

    #[test]
    fn nothing_to_move() {
        let mut mines = layout((4, 4), &[(3, 3)]);

        assert_eq!(relocate_from_zone(&mut mines, (0, 0)), 0);
        assert!(mines.contains_mine((3, 3)));
    }

    #[test]
    fn saturated_board_keeps_leftover_mines() {
        let mut mines = layout((3, 4), &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 3)]);

        let moved = relocate_from_zone(&mut mines, (1, 1));

        // only (0, 3) and (1, 3) are outside the zone and free
        assert_eq!(moved, 2);
        assert!(!mines.contains_mine((0, 0)));
        assert!(!mines.contains_mine((0, 1)));
        assert!(mines.contains_mine((1, 0)));
        assert!(mines.contains_mine((1, 1)));
        assert!(mines.contains_mine((0, 3)));
        assert!(mines.contains_mine((1, 3)));
    }
}
