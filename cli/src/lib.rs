//! Console front end for fogsweep: reads `<col> <row> <mine|free>` commands,
//! applies them to a [`fogsweep_core::Grid`] and draws the field as text.

pub use args::Args;
pub use session::*;

pub mod command;
pub mod render;

mod args;
mod session;
