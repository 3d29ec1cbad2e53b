use crate::*;
pub use relocate::*;
pub use shuffle::*;

mod relocate;
mod shuffle;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
