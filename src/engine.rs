use crate::{EngineConfig, FillPolicy, Grid, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Lifecycle state of a [`SimulationEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SimState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Read-only view of the engine at one moment.
///
/// The grid is shared: holding a snapshot keeps that generation alive
/// while the engine moves on to new ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub cells: Arc<Grid>,
    pub generation: u64,
    pub population: usize,
    pub state: SimState,
}

/// Game of Life on a bounded grid with a run/pause/stop/reset lifecycle.
///
/// The engine owns no timer: an external driver calls [`SimulationEngine::advance`]
/// on every tick, and it only has effect while the engine is running.
pub struct SimulationEngine {
    grid: Arc<Grid>,   // Current generation; replaced wholesale by every transition.
    generation: u64,   // Transitions applied since the last stop/reset/resize.
    population: usize, // Alive cells in `grid`.
    state: SimState,
    config: EngineConfig,
    rng: ChaCha8Rng, // Source of every random fill.
}

impl SimulationEngine {
    /// Create a stopped engine with an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize, config: EngineConfig) -> Result<Self> {
        let grid = Grid::blank(rows, cols)?;
        let rng = if let Some(x) = config.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        log::info!(
            "Engine created: {}x{}, fill rate {}, seed {:?}",
            rows,
            cols,
            config.fill_rate,
            config.seed
        );
        Ok(Self {
            grid: Arc::new(grid),
            generation: 0,
            population: 0,
            state: SimState::Stopped,
            config,
            rng,
        })
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: Arc::clone(&self.grid),
            generation: self.generation,
            population: self.population,
            state: self.state,
        }
    }

    /// Install `grid` as generation zero.
    fn replace_grid(&mut self, grid: Grid) {
        self.population = grid.population();
        self.grid = Arc::new(grid);
        self.generation = 0;
    }

    fn fill(&mut self, fill: FillPolicy) {
        let (rows, cols) = (self.rows(), self.cols());
        match Grid::new(rows, cols, fill, &mut self.rng) {
            Ok(grid) => self.replace_grid(grid),
            // current dimensions were validated when the grid was built
            Err(e) => debug_assert!(false, "refilling a valid grid failed: {}", e),
        }
    }

    fn randomize(&mut self) {
        self.fill(FillPolicy::Random {
            fill_rate: self.config.fill_rate,
        });
        log::debug!(
            "Random grid drawn: {}x{}, population {}",
            self.rows(),
            self.cols(),
            self.population
        );
    }

    /// Replace the grid with an empty one of the new size.
    ///
    /// On error nothing changes. The lifecycle state is kept.
    pub fn configure_dimensions(&mut self, rows: usize, cols: usize) -> Result<()> {
        let grid = Grid::blank(rows, cols)?;
        self.replace_grid(grid);
        log::info!("Dimensions configured: {}x{}", rows, cols);
        Ok(())
    }

    /// Start running; an empty grid is first replaced by a random one.
    pub fn start(&mut self) {
        if self.population == 0 {
            self.randomize();
        }
        if self.state != SimState::Running {
            log::info!(
                "Started at generation {}, population {}",
                self.generation,
                self.population
            );
        }
        self.state = SimState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == SimState::Running {
            self.state = SimState::Paused;
            log::info!("Paused at generation {}", self.generation);
        }
    }

    /// Halt and clear the grid.
    pub fn stop(&mut self) {
        self.fill(FillPolicy::Empty);
        self.state = SimState::Stopped;
        log::info!("Stopped");
    }

    /// Restart immediately with a fresh random grid.
    pub fn reset(&mut self) {
        self.randomize();
        self.state = SimState::Running;
        log::info!("Reset: population {}", self.population);
    }

    /// Apply one transition if running. Returns whether it was applied.
    pub fn advance(&mut self) -> bool {
        if self.state != SimState::Running {
            return false;
        }
        self.apply_transition();
        true
    }

    /// Apply one transition regardless of the lifecycle state.
    pub fn step(&mut self) {
        self.apply_transition();
    }

    fn apply_transition(&mut self) {
        let next = self.grid.transition();
        self.population = next.population();
        self.grid = Arc::new(next);
        self.generation += 1;
        log::trace!(
            "Generation {}: population {}",
            self.generation,
            self.population
        );
    }

    /// Install a caller-supplied grid as generation zero; the state is kept.
    pub fn load(&mut self, grid: Grid) {
        log::info!(
            "Grid loaded: {}x{}, population {}",
            grid.rows(),
            grid.cols(),
            grid.population()
        );
        self.replace_grid(grid);
    }

    /// Flip one cell. Returns `false` if `(x, y)` is out of bounds.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        let grid = Arc::make_mut(&mut self.grid);
        if !grid.toggle(x, y) {
            return false;
        }
        self.population = grid.population();
        true
    }
}
