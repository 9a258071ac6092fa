use thiserror::Error;

/// Why a grid operation was refused.
///
/// Messages describe the cell without naming it; callers know which
/// coordinates they passed and render them in their own convention.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must have at least one cell")]
    InvalidSize,
    #[error("Grid must be square with at most 255 cells per side")]
    InvalidBoardShape,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Cell shows a hint, can not mark or explore it")]
    AlreadyHinted,
    #[error("Cell is already explored")]
    AlreadyRevealed,
    #[error("Cell is marked as a mine, unmark it before exploring")]
    AlreadyMarked,
    #[error("Cell is a mine")]
    MineTriggered,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether this error ends the game instead of asking for another move.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::MineTriggered)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
