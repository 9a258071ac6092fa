use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use fogsweep_core::{
    CellCount, Coord, GameConfig, Grid, MinefieldGenerator, RandomMinefieldGenerator,
};

use crate::command::{Action, Command};
use crate::render::render_board;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub size: Coord,
    /// Prompted for when missing.
    pub mines: Option<CellCount>,
    pub seed: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Input ran out before the game ended.
    Aborted,
}

enum TurnOutcome {
    Played,
    SteppedOnMine,
    EndOfInput,
}

/// Drives one game over a line-based reader and a text writer.
pub struct GameSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Sets up a random field from `config` and plays it to the end.
    pub fn run(&mut self, config: SessionConfig) -> Result<SessionOutcome> {
        let game_config = match config.mines {
            Some(mines) => GameConfig::new(config.size, mines)
                .with_context(|| format!("Can not place {} mines", mines))?,
            None => match self.ask_game_config(config.size)? {
                Some(game_config) => game_config,
                None => return Ok(SessionOutcome::Aborted),
            },
        };

        log::info!(
            "Starting {}x{} game with {} mines (seed {})",
            game_config.size,
            game_config.size,
            game_config.mines,
            config.seed
        );
        let grid = RandomMinefieldGenerator::new(config.seed).generate(game_config);
        self.play(grid)
    }

    /// Plays an already mined `grid` until it is solved or a mine goes off.
    pub fn play(&mut self, mut grid: Grid) -> Result<SessionOutcome> {
        self.print_board(&grid, false)?;

        while !grid.is_solved() {
            match self.take_turn(&mut grid)? {
                TurnOutcome::Played => {}
                TurnOutcome::SteppedOnMine => {
                    self.print_board(&grid, true)?;
                    writeln!(self.output, "You stepped on a mine and failed!")?;
                    return Ok(SessionOutcome::Lost);
                }
                TurnOutcome::EndOfInput => {
                    log::info!("Input closed before the game ended");
                    return Ok(SessionOutcome::Aborted);
                }
            }

            grid.recompute_hints();
            self.print_board(&grid, false)?;
        }

        writeln!(self.output, "Congratulations! You found all the mines!")?;
        Ok(SessionOutcome::Won)
    }

    fn ask_game_config(&mut self, size: Coord) -> Result<Option<GameConfig>> {
        loop {
            writeln!(self.output, "How many mines do you want on the field?")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let config = line
                .trim()
                .parse::<CellCount>()
                .ok()
                .and_then(|mines| GameConfig::new(size, mines).ok());
            match config {
                Some(config) => return Ok(Some(config)),
                None => {
                    let max = GameConfig::new_unchecked(size, 0).total_cells().saturating_sub(1);
                    writeln!(
                        self.output,
                        "Please enter a number of mines between 1 and {}.",
                        max
                    )?;
                }
            }
        }
    }

    /// Keeps asking until one command is accepted by the grid.
    fn take_turn(&mut self, grid: &mut Grid) -> Result<TurnOutcome> {
        loop {
            writeln!(self.output, "Set/unset mines marks or claim a cell as free:")?;
            let Some(line) = self.read_line()? else {
                return Ok(TurnOutcome::EndOfInput);
            };

            let command = match Command::parse(&line, grid.size()) {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("Rejected input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            let result = match command.action {
                Action::Mark => grid.toggle_mark(command.coords).map(|_| ()),
                Action::Explore => grid.reveal(command.coords).map(|_| ()),
            };

            match result {
                Ok(()) => return Ok(TurnOutcome::Played),
                Err(err) if err.is_terminal() => return Ok(TurnOutcome::SteppedOnMine),
                Err(err) => {
                    let (row, col) = command.coords;
                    log::debug!("Rejected move {:?}: {:?}", command, err);
                    writeln!(self.output, "Field {} {}: {}", col + 1, row + 1, err)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read player input")?;
        Ok((read > 0).then_some(line))
    }

    fn print_board(&mut self, grid: &Grid, reveal_all: bool) -> Result<()> {
        write!(self.output, "{}", render_board(grid, reveal_all))?;
        self.output.flush()?;
        Ok(())
    }
}
