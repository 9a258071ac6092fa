#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const CLASSIC_SIZE: Coord = 9;

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates a square grid of `size` with `mines` mines, leaving at least
    /// one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            log::warn!("Rejected empty grid");
            return Err(GameError::InvalidSize);
        }
        if mines == 0 {
            log::warn!("Rejected minefield without mines");
            return Err(GameError::NoMines);
        }
        let config = Self::new_unchecked(size, mines);
        if mines >= config.total_cells() {
            log::warn!(
                "Rejected {} mines, a {}x{} grid fits at most {}",
                mines,
                size,
                size,
                config.total_cells() - 1
            );
            return Err(GameError::TooManyMines);
        }
        Ok(config)
    }

    pub const fn classic() -> Self {
        Self::new_unchecked(Self::CLASSIC_SIZE, 10)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked,
    Unmarked,
}
