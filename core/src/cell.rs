use serde::{Deserialize, Serialize};

/// Player mark on a closed cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    None,
    Flag,
    Question,
}

impl Mark {
    /// Next mark in the cycle, `Question` is skipped unless `with_question` is set.
    pub const fn cycle(self, with_question: bool) -> Self {
        match (self, with_question) {
            (Self::None, _) => Self::Flag,
            (Self::Flag, true) => Self::Question,
            (Self::Flag, false) => Self::None,
            (Self::Question, _) => Self::None,
        }
    }

    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Flag)
    }
}

/// Snapshot of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub is_mine: bool,
    pub is_open: bool,
    pub mark: Mark,
    /// Only meaningful after the first open of the game, always zero on mines.
    pub adjacent_mines: u8,
}

impl Cell {
    /// Closed and not protected by a flag.
    pub const fn is_closed_unflagged(self) -> bool {
        !self.is_open && !self.mark.is_flag()
    }

    /// Open and showing a non-zero number.
    pub const fn is_open_numbered(self) -> bool {
        self.is_open && self.adjacent_mines > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_with_question_marks() {
        let mark = Mark::None.cycle(true);
        assert_eq!(mark, Mark::Flag);
        let mark = mark.cycle(true);
        assert_eq!(mark, Mark::Question);
        assert_eq!(mark.cycle(true), Mark::None);
    }

    #[test]
    fn cycle_without_question_marks() {
        assert_eq!(Mark::None.cycle(false), Mark::Flag);
        assert_eq!(Mark::Flag.cycle(false), Mark::None);
        assert_eq!(Mark::Question.cycle(false), Mark::None);
    }
}
