use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement, every mine lands on a cell that is still free so the
/// requested count is always reached.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        let mut grid = Grid::new(config.size);
        let mut free_cells = config.total_cells();
        let mut mines_placed: CellCount = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines_placed < config.mines {
            if free_cells == 0 {
                break;
            }

            let place = rng.random_range(0..free_cells);
            let target = grid
                .coords()
                .filter(|&coords| grid.cell_at(coords).is_ok_and(|cell| !cell.is_mine()))
                .nth(place.into());

            if let Some(coords) = target {
                if let Ok(true) = grid.place_mine(coords) {
                    mines_placed += 1;
                }
            }
            free_cells -= 1;
        }

        // double check mine count
        let count = grid.count_mines();
        if count != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        log::debug!("Generated {}x{} minefield with {} mines", config.size, config.size, count);
        grid
    }
}
