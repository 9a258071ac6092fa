use serde::{Deserialize, Serialize};

/// One grid position.
///
/// The mine flag is fixed once placement finishes. `explored` never reverts,
/// and `hint` is rewritten on every hint pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) marked: bool,
    pub(crate) explored: bool,
    pub(crate) hint: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_marked(self) -> bool {
        self.marked
    }

    pub const fn is_explored(self) -> bool {
        self.explored
    }

    /// Visible hint, 0 while no cell in its 3x3 block has been explored.
    pub const fn hint(self) -> u8 {
        self.hint
    }

    pub const fn view(self, reveal_all: bool) -> CellView {
        use CellView::*;

        if self.hint > 0 {
            Hint(self.hint)
        } else if self.explored {
            Free
        } else if self.marked {
            Marked
        } else if self.mine && reveal_all {
            Mine
        } else {
            Hidden
        }
    }
}

/// Player-visible state of a cell, what a renderer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hint(u8),
    Free,
    Marked,
    /// Only produced when the whole field is revealed at game end.
    Mine,
    Hidden,
}

impl CellView {
    /// Board character, `?` for a hint that does not fit one digit.
    pub fn symbol(self) -> char {
        use CellView::*;

        match self {
            Hint(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Free => '/',
            Marked => '*',
            Mine => 'X',
            Hidden => '.',
        }
    }
}
