#![warn(clippy::all)]

mod engine;
mod error;
mod grid;
mod gui;
mod utils;

pub use engine::{SimState, SimulationEngine, Snapshot};
pub use error::{Error, Result};
pub use grid::{Cell, FillPolicy, Grid};
pub use gui::{App, Config};
pub use utils::{parse_plaintext, EngineConfig, NiceInt, Ticker};
