use std::fmt::Write as _;

use sweeper_core::{Cell, GameEngine, Mark};

fn cell_char(cell: Cell, triggered: bool) -> char {
    match cell {
        _ if triggered => 'X',
        Cell { is_open: true, is_mine: true, .. } => '*',
        Cell { is_open: true, adjacent_mines: 0, .. } => ' ',
        Cell { is_open: true, adjacent_mines, .. } => char::from(b'0' + adjacent_mines),
        Cell { mark: Mark::Flag, .. } => 'F',
        Cell { mark: Mark::Question, .. } => '?',
        Cell { mark: Mark::None, .. } => '.',
    }
}

/// Plain text dump of the board with row and column labels.
pub fn render_board(engine: &GameEngine) -> String {
    let mut out = String::from("    ");
    for col in 0..engine.cols() {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    let mut row_open = None;
    for ((row, col), cell) in engine.iter_cells() {
        if row_open != Some(row) {
            if row_open.is_some() {
                out.push('\n');
            }
            let _ = write!(out, "{:>3} ", row);
            row_open = Some(row);
        }
        let triggered = engine.triggered_mine() == Some((row, col));
        let _ = write!(out, "{:>3}", cell_char(cell, triggered));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{FieldGeneration, MineLayout, Settings};

    #[test]
    fn renders_lost_board() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2)]).unwrap();
        let settings = Settings {
            field_generation: FieldGeneration::Random,
            ..Default::default()
        };
        let mut engine = GameEngine::with_layout(layout, 0, settings);

        engine.cycle_mark((0, 2)).unwrap();
        engine.open_cell((1, 0)).unwrap();
        engine.open_cell((0, 0)).unwrap();

        assert_eq!(
            render_board(&engine),
            "      0  1  2\n  0   X  .  F\n  1   1  .  *\n"
        );
    }
}
