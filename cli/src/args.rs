use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fogsweep_core::{CellCount, Coord, GameConfig};

use crate::SessionConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Side length of the square field
    #[arg(short, long, default_value_t = GameConfig::CLASSIC_SIZE, value_parser = clap::value_parser!(u8).range(1..))]
    pub size: Coord,

    /// How many mines to hide, asked for interactively when omitted
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn session_config(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            size: self.size,
            mines: self.mines,
            seed,
        }
    }
}
