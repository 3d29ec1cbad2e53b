use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Summary of a finished game, as stored by a leaderboard or history.
///
/// Together with the seed the dimensions are enough to rebuild the same mine layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    /// Elapsed seconds.
    pub time: u32,
    pub seed: Seed,
    pub won: bool,
}

impl GameRecord {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new((self.rows, self.cols), self.mines)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
