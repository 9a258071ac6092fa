use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridState {
    Active,
    Won,
    Lost,
}

impl GridState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The square minefield and everything the player did to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
    triggered_mine: Option<Coord2>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    cells: Array2<Cell>,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let (rows, cols) = raw.cells.dim();
        if rows != cols || rows > usize::from(Coord::MAX) {
            log::warn!("Rejected {}x{} grid", rows, cols);
            return Err(GameError::InvalidBoardShape);
        }

        let grid = Self {
            cells: raw.cells,
            triggered_mine: None,
        };
        let triggered_mine = raw
            .triggered_mine
            .map(|coords| grid.validate_coords(coords))
            .transpose()?;
        Ok(Self {
            triggered_mine,
            ..grid
        })
    }
}

impl Grid {
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default(nd_index((size, size))),
            triggered_mine: None,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> Coord {
        // always square and built from a `Coord`
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Cells touching `coords`, without `coords` itself.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[nd_index(coords)])
    }

    pub fn view_at(&self, coords: Coord2, reveal_all: bool) -> Result<CellView> {
        Ok(self.cell_at(coords)?.view(reveal_all))
    }

    /// Read-only picture of the whole grid, indexed by `[row, col]`.
    pub fn snapshot(&self, reveal_all: bool) -> Array2<CellView> {
        self.cells.map(|cell| cell.view(reveal_all))
    }

    pub fn state(&self) -> GridState {
        if self.triggered_mine.is_some() {
            GridState::Lost
        } else if self.is_solved() {
            GridState::Won
        } else {
            GridState::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Puts a mine at `coords`, returns whether the cell was not a mine before.
    pub fn place_mine(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[nd_index(coords)];
        if cell.mine {
            return Ok(false);
        }

        cell.mine = true;
        log::trace!("Placed mine at {:?}", coords);
        Ok(true)
    }

    pub fn count_mines(&self) -> CellCount {
        self.count_cells(Cell::is_mine)
    }

    pub fn marked_count(&self) -> CellCount {
        self.count_cells(Cell::is_marked)
    }

    /// How many mines have not been marked yet, negative with too many marks.
    pub fn mines_left(&self) -> isize {
        (self.count_mines() as isize) - (self.marked_count() as isize)
    }

    pub fn has_mines_around(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.touches_mine(coords))
    }

    /// Recomputes every hint from scratch.
    ///
    /// A safe cell gets its neighbor mine count only when some cell of its 3x3
    /// block, itself included, has been explored; otherwise the hint stays 0.
    pub fn recompute_hints(&mut self) {
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                let hint = if self.cells[nd_index(coords)].mine || !self.sees_explored(coords) {
                    0
                } else {
                    self.adjacent_mine_count(coords)
                };
                self.cells[nd_index(coords)].hint = hint;
            }
        }
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_active()?;

        let cell = &mut self.cells[nd_index(coords)];
        if cell.hint > 0 {
            log::debug!("Refused to mark hinted cell {:?}", coords);
            return Err(GameError::AlreadyHinted);
        }
        if cell.explored {
            log::debug!("Refused to mark explored cell {:?}", coords);
            return Err(GameError::AlreadyRevealed);
        }

        cell.marked = !cell.marked;
        log::debug!("Toggled mark at {:?}: {}", coords, cell.marked);
        Ok(if cell.marked {
            MarkOutcome::Marked
        } else {
            MarkOutcome::Unmarked
        })
    }

    /// Explores `coords`, cascading through the mine-free region around it.
    ///
    /// Returns how many cells became explored. Stepping on a mine records the
    /// triggered cell and fails with [`GameError::MineTriggered`] without
    /// touching any cell.
    pub fn reveal(&mut self, coords: Coord2) -> Result<CellCount> {
        let coords = self.validate_coords(coords)?;
        self.check_active()?;

        let cell = self.cells[nd_index(coords)];
        if cell.explored {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.hint > 0 {
            return Err(GameError::AlreadyHinted);
        }
        if cell.marked {
            return Err(GameError::AlreadyMarked);
        }
        if cell.mine {
            log::debug!("Stepped on mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            return Err(GameError::MineTriggered);
        }

        let explored = self.explore_region(coords);
        log::debug!("Explored {} cells starting at {:?}", explored, coords);
        Ok(explored)
    }

    /// Whether the marks are exactly the mines.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.mine == cell.marked)
    }

    fn explore_region(&mut self, start: Coord2) -> CellCount {
        self.cells[nd_index(start)].explored = true;
        let mut explored: CellCount = 1;

        if self.touches_mine(start) {
            return explored;
        }

        // cells are flagged explored before being queued, so none is queued twice
        let mut to_visit: Vec<Coord2> = vec![start];
        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.neighbors(visit_coords) {
                let cell = self.cells[nd_index(pos)];
                if cell.explored || cell.marked || cell.mine || self.touches_mine(pos) {
                    continue;
                }

                self.cells[nd_index(pos)].explored = true;
                explored += 1;
                log::trace!("Flood explored {:?}", pos);
                to_visit.push(pos);
            }
        }

        explored
    }

    fn touches_mine(&self, coords: Coord2) -> bool {
        self.neighbors(coords).any(|pos| self.cells[nd_index(pos)].mine)
    }

    fn sees_explored(&self, coords: Coord2) -> bool {
        self.cells[nd_index(coords)].explored
            || self
                .neighbors(coords)
                .any(|pos| self.cells[nd_index(pos)].explored)
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.neighbors(coords)
            .filter(|&pos| self.cells[nd_index(pos)].mine)
            .count() as u8
    }

    fn count_cells(&self, predicate: fn(Cell) -> bool) -> CellCount {
        // bounded by `Coord::MAX` squared
        self.cells.iter().filter(|&&cell| predicate(cell)).count() as CellCount
    }

    fn check_active(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
