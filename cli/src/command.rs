use std::str::FromStr;

use fogsweep_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Set or unset a mine mark.
    Mark,
    /// Claim the cell is free and explore it.
    Explore,
}

impl FromStr for Action {
    type Err = CommandError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.to_ascii_lowercase().as_str() {
            "mine" => Ok(Self::Mark),
            "free" => Ok(Self::Explore),
            _ => Err(CommandError::UnknownMode(mode.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Expected `<col> <row> <mine|free>`, got {0} values")]
    TokenCount(usize),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("Unknown mode `{0}`, use `mine` or `free`")]
    UnknownMode(String),
    #[error("Field {col} {row} is outside the 1..={size} range")]
    OutOfRange { col: u32, row: u32, size: Coord },
}

/// One player move, with 0-based `(row, col)` coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub coords: Coord2,
    pub action: Action,
}

impl Command {
    /// Parses `<col> <row> <mode>` as typed by the player, 1-based.
    pub fn parse(line: &str, size: Coord) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[col, row, mode] = tokens.as_slice() else {
            return Err(CommandError::TokenCount(tokens.len()));
        };

        let col = parse_axis(col)?;
        let row = parse_axis(row)?;
        let action = mode.parse()?;

        let in_range = |value: u32| (1..=u32::from(size)).contains(&value);
        if !in_range(col) || !in_range(row) {
            return Err(CommandError::OutOfRange { col, row, size });
        }

        // both checked against a `Coord` bound above
        let coords = ((row - 1) as Coord, (col - 1) as Coord);
        Ok(Self { coords, action })
    }
}

fn parse_axis(token: &str) -> Result<u32, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::NotANumber(token.to_string()))
}
