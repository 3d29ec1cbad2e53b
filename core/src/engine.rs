use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Mines are placed but nothing was opened yet.
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Player-controlled part of a cell, mines and numbers live in the layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct CellState {
    is_open: bool,
    mark: Mark,
}

/// A single seeded game, from the first click to a win or a loss.
///
/// Cells are only handed out as [`Cell`] snapshots, all mutation goes through the engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    seed: Seed,
    settings: Settings,
    mine_layout: MineLayout,
    board: Array2<CellState>,
    numbers: Array2<u8>,
    opened_safe_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: GameState,
    first_click: bool,
    triggered_mine: Option<Coord2>,
    highlighted: BTreeSet<Coord2>,
    timer: GameTimer,
}

impl GameEngine {
    /// Creates a game with a shuffled layout, a fresh seed is drawn when `seed` is `None`.
    pub fn new(config: GameConfig, seed: Option<Seed>, settings: Settings) -> Self {
        let config = GameConfig::new(config.size, config.mines);
        let seed = seed.unwrap_or_else(random_seed);
        let mine_layout = ShuffleGenerator::new(seed).generate(config);
        Self::with_layout(mine_layout, seed, settings)
    }

    /// Creates a game on an explicit layout, `seed` is only kept for the record.
    pub fn with_layout(mine_layout: MineLayout, seed: Seed, settings: Settings) -> Self {
        let size = mine_layout.size();
        log::debug!(
            "New game {:?} with {} mines, seed {}",
            size,
            mine_layout.mine_count(),
            seed
        );
        Self {
            config: mine_layout.game_config(),
            seed,
            settings,
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            numbers: Array2::zeros(size.to_nd_index()),
            opened_safe_count: Saturating(0),
            flagged_count: Saturating(0),
            state: GameState::Idle,
            first_click: true,
            triggered_mine: None,
            highlighted: BTreeSet::new(),
            timer: GameTimer::default(),
        }
    }

    /// Replaces the whole game, see [`new`](Self::new).
    pub fn init_game(&mut self, config: GameConfig, seed: Option<Seed>, settings: Settings) {
        *self = Self::new(config, seed, settings);
    }

    /// Starts over on the same layout.
    pub fn restart_game(&mut self) {
        self.init_game(self.config, Some(self.seed), self.settings);
    }

    /// Starts over with the same dimensions and a fresh seed.
    pub fn new_game(&mut self) {
        self.init_game(self.config, None, self.settings);
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mines_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn flags_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.cell(coords))
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        let (rows, cols) = self.size();
        (0..rows)
            .flat_map(move |row| (0..cols).map(move |col| (row, col)))
            .map(|coords| (coords, self.cell(coords)))
    }

    /// Record of the finished game, `None` while it is still going.
    pub fn record(&self) -> Option<GameRecord> {
        self.is_finished().then(|| GameRecord {
            rows: self.rows(),
            cols: self.cols(),
            mines: self.mines_count(),
            time: self.elapsed_secs(),
            seed: self.seed,
            won: matches!(self.state, GameState::Won),
        })
    }

    /// Opens a cell using the settings the game was created with.
    pub fn open_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let settings = self.settings;
        self.open_cell_with(coords, &settings)
    }

    /// Opens a closed cell, or chords when `coords` is an open number.
    pub fn open_cell_with(&mut self, coords: Coord2, settings: &Settings) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.open_at(coords, settings))
    }

    /// Cycles the mark of a closed cell using the settings the game was created with.
    pub fn cycle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let settings = self.settings;
        self.cycle_mark_with(coords, &settings)
    }

    pub fn cycle_mark_with(&mut self, coords: Coord2, settings: &Settings) -> Result<MarkOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let tile = self.board[coords.to_nd_index()];
        if tile.is_open {
            return Ok(MarkOutcome::NoChange);
        }

        self.set_mark(coords, tile.mark.cycle(settings.show_question_marks));
        Ok(MarkOutcome::Changed)
    }

    /// Highlights the closed, unflagged neighbors of an open number.
    pub fn highlight_neighbors(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if !self.cell(coords).is_open_numbered() {
            return Ok(());
        }

        self.highlighted = self
            .mine_layout
            .iter_neighbors(coords)
            .filter(|&pos| self.cell(pos).is_closed_unflagged())
            .collect();
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted.clear();
    }

    pub fn highlighted(&self) -> &BTreeSet<Coord2> {
        &self.highlighted
    }

    pub fn is_highlighted(&self, coords: Coord2) -> bool {
        self.highlighted.contains(&coords)
    }

    fn open_at(&mut self, coords: Coord2, settings: &Settings) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::NoChange;
        }

        let cell = self.cell(coords);
        if cell.is_open_numbered() {
            return self.chord(coords, cell.adjacent_mines, settings);
        }

        if !cell.is_closed_unflagged() {
            return RevealOutcome::NoChange;
        }

        if self.first_click {
            self.start(coords, settings);
        }

        if self.mine_layout[coords] {
            if settings.dev_mode {
                log::debug!("Dev mode, ignoring mine at {:?}", coords);
                return RevealOutcome::NoChange;
            }
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.opened_safe_count.0 == self.mine_layout.safe_cell_count() {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn chord(&mut self, coords: Coord2, count: u8, settings: &Settings) -> RevealOutcome {
        if !settings.enable_chord {
            return RevealOutcome::NoChange;
        }

        let flagged = self.count_neighbors(coords, |cell| cell.mark.is_flag());
        let closed_unflagged = self.count_neighbors(coords, Cell::is_closed_unflagged);

        // flag completion is checked before opening
        if closed_unflagged > 0 && closed_unflagged + flagged == count {
            for pos in self.mine_layout.iter_neighbors(coords) {
                if self.cell(pos).is_closed_unflagged() {
                    self.set_mark(pos, Mark::Flag);
                }
            }
            return RevealOutcome::Flagged;
        }

        if flagged != count {
            return RevealOutcome::NoChange;
        }

        let mut outcome = RevealOutcome::NoChange;
        for pos in self.mine_layout.iter_neighbors(coords) {
            if self.cell(pos).is_closed_unflagged() {
                outcome = outcome | self.open_at(pos, settings);
            }
        }
        outcome
    }

    /// First open of the game: fixes the layout, computes numbers and starts the clock.
    fn start(&mut self, coords: Coord2, settings: &Settings) {
        self.first_click = false;
        if settings.field_generation.relocates_first_click() {
            relocate_from_zone(&mut self.mine_layout, coords);
        }
        self.numbers = self.mine_layout.adjacency_numbers();
        self.state = GameState::Playing;
        self.timer.start();
        log::debug!("Game started at {:?}", coords);
    }

    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit = vec![origin];

        while let Some(coords) = to_visit.pop() {
            let tile = self.board[coords.to_nd_index()];
            if tile.is_open || tile.mark.is_flag() || self.mine_layout[coords] {
                continue;
            }

            self.board[coords.to_nd_index()].is_open = true;
            self.opened_safe_count += 1;

            let count = self.numbers[coords.to_nd_index()];
            log::trace!("Opened {:?}, adjacent mines: {}", coords, count);

            if count == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.cell(pos).is_closed_unflagged())
                        .filter(|&pos| !self.mine_layout[pos]),
                );
            }
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        self.timer.stop();

        let mines: Vec<Coord2> = self.mine_layout.iter_mines().collect();
        for coords in mines {
            if won {
                self.set_mark(coords, Mark::Flag);
            } else {
                self.board[coords.to_nd_index()].is_open = true;
            }
        }
        log::debug!(
            "Game {} after {}s",
            if won { "won" } else { "lost" },
            self.timer.elapsed_secs()
        );
    }

    fn set_mark(&mut self, coords: Coord2, mark: Mark) {
        let tile = &mut self.board[coords.to_nd_index()];
        match (tile.mark.is_flag(), mark.is_flag()) {
            (false, true) => self.flagged_count += 1,
            (true, false) => self.flagged_count -= 1,
            _ => {}
        }
        tile.mark = mark;
    }

    fn cell(&self, coords: Coord2) -> Cell {
        let tile = self.board[coords.to_nd_index()];
        Cell {
            is_mine: self.mine_layout[coords],
            is_open: tile.is_open,
            mark: tile.mark,
            adjacent_mines: self.numbers[coords.to_nd_index()],
        }
    }

    fn count_neighbors(&self, coords: Coord2, predicate: impl Fn(Cell) -> bool) -> u8 {
        self.mine_layout
            .iter_neighbors(coords)
            .filter(|&pos| predicate(self.cell(pos)))
            .count() as u8
    }
}
