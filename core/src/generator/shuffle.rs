use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Places mines on the first cells of a seeded Fisher–Yates shuffle of the whole board.
///
/// Nothing is known about the first click at this point, making the start cell safe is left to
/// [`relocate_from_zone`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: Seed,
}

impl ShuffleGenerator {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let (rows, cols) = config.size;
        let mut cells: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .collect();

        let mut rng = Mulberry32::new(self.seed);
        for i in (1..cells.len()).rev() {
            let j = rng.index_below(i as u32 + 1);
            cells.swap(i, j);
        }

        let mine_count = usize::from(config.mines).min(cells.len());
        if mine_count < usize::from(config.mines) {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                config.mines,
                cells.len()
            );
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for &coords in &cells[..mine_count] {
            mine_mask[coords.to_nd_index()] = true;
        }
        log::debug!("Generated {} mines with seed {}", mine_count, self.seed);

        MineLayout::from_sized_mask(config.size, mine_mask)
    }
}
