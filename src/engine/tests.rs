use super::{SimState, SimulationEngine};
use crate::{Cell, EngineConfig, Error, Grid};

const SEED: u64 = 42;

fn seeded(rows: usize, cols: usize) -> SimulationEngine {
    SimulationEngine::new(rows, cols, EngineConfig::default().with_seed(SEED)).unwrap()
}

/// A pattern that neither dies out nor stabilises quickly on a small board.
fn r_pentomino() -> Grid {
    Grid::from_plaintext(
        "..........\n\
         ..........\n\
         ..........\n\
         .....OO...\n\
         ....OO....\n\
         .....O....\n\
         ..........\n\
         ..........\n\
         ..........\n\
         ..........",
    )
    .unwrap()
}

fn assert_population_consistent(engine: &SimulationEngine) {
    assert_eq!(engine.population(), engine.grid().population());
}

#[test]
fn test_new_engine_is_stopped_and_empty() {
    let engine = seeded(8, 12);
    assert_eq!(engine.state(), SimState::Stopped);
    assert_eq!((engine.rows(), engine.cols()), (8, 12));
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.population(), 0);
    assert_eq!(engine.grid().population(), 0);
    assert!(SimulationEngine::new(0, 3, EngineConfig::default()).is_err());
}

#[test]
fn test_start_randomizes_empty_grid() {
    let mut engine = seeded(30, 30);
    engine.start();
    assert_eq!(engine.state(), SimState::Running);
    assert!(engine.population() > 0);
    assert_eq!(engine.generation(), 0);
    assert_population_consistent(&engine);
}

#[test]
fn test_advance_is_guarded_by_state() {
    let mut engine = seeded(20, 20);
    assert!(!engine.advance());
    assert_eq!(engine.generation(), 0);

    engine.start();
    for i in 1..=5 {
        assert!(engine.advance());
        assert_eq!(engine.generation(), i);
        assert_population_consistent(&engine);
    }

    engine.pause();
    let snapshot = engine.snapshot();
    assert!(!engine.advance());
    assert_eq!(engine.snapshot(), snapshot);

    engine.stop();
    assert!(!engine.advance());
    assert_eq!(engine.generation(), 0);
}

#[test]
fn test_pause_then_start_resumes_same_grid() {
    let mut engine = seeded(10, 10);
    engine.load(r_pentomino());
    engine.start();
    engine.advance();
    engine.advance();
    engine.pause();
    assert_eq!(engine.state(), SimState::Paused);

    let paused = engine.snapshot();
    engine.start();
    assert_eq!(engine.state(), SimState::Running);
    assert_eq!(*engine.grid(), *paused.cells);
    assert_eq!(engine.generation(), 2);

    engine.advance();
    assert_eq!(*engine.grid(), paused.cells.transition());
    assert_eq!(engine.generation(), 3);
}

#[test]
fn test_pause_is_noop_unless_running() {
    let mut engine = seeded(10, 10);
    engine.pause();
    assert_eq!(engine.state(), SimState::Stopped);

    engine.start();
    engine.pause();
    engine.pause();
    assert_eq!(engine.state(), SimState::Paused);
}

#[test]
fn test_stop_clears_everything() {
    let mut engine = seeded(16, 16);
    engine.start();
    for _ in 0..3 {
        engine.advance();
    }
    engine.stop();
    assert_eq!(engine.state(), SimState::Stopped);
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.population(), 0);
    assert_eq!(*engine.grid(), Grid::blank(16, 16).unwrap());

    // a stopped engine is restarted with a fresh random grid
    engine.start();
    assert!(engine.population() > 0);
}

#[test]
fn test_reset_draws_a_new_grid_and_runs() {
    let mut engine = seeded(24, 24);
    engine.start();
    engine.advance();
    engine.pause();
    let before = engine.snapshot();

    engine.reset();
    assert_eq!(engine.state(), SimState::Running);
    assert_eq!(engine.generation(), 0);
    assert_ne!(*engine.grid(), *before.cells);
    assert_population_consistent(&engine);

    let first = engine.snapshot();
    engine.reset();
    assert_ne!(*engine.grid(), *first.cells);
}

#[test]
fn test_seed_makes_runs_reproducible() {
    let (mut a, mut b) = (seeded(20, 30), seeded(20, 30));
    a.start();
    b.start();
    for _ in 0..10 {
        a.advance();
        b.advance();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_configure_dimensions() {
    let mut engine = seeded(10, 10);
    engine.start();
    engine.advance();

    engine.configure_dimensions(6, 9).unwrap();
    assert_eq!((engine.rows(), engine.cols()), (6, 9));
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.population(), 0);
    assert_eq!(engine.state(), SimState::Running);

    // running with an empty grid: start draws a new one
    engine.start();
    assert!(engine.population() > 0);
}

#[test]
fn test_configure_dimensions_rejects_zero() {
    let mut engine = seeded(10, 10);
    engine.start();
    engine.advance();
    let before = engine.snapshot();

    assert_eq!(
        engine.configure_dimensions(0, 5),
        Err(Error::InvalidDimensions { rows: 0, cols: 5 })
    );
    assert_eq!(
        engine.configure_dimensions(5, 0),
        Err(Error::InvalidDimensions { rows: 5, cols: 0 })
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_configure_dimensions_rejects_overflowing_size() {
    let mut engine = seeded(10, 10);
    engine.start();
    engine.advance();
    let before = engine.snapshot();

    let side = 1usize << (usize::BITS / 2);
    assert_eq!(
        engine.configure_dimensions(side, side),
        Err(Error::InvalidDimensions {
            rows: side,
            cols: side
        })
    );
    assert_eq!(engine.snapshot(), before);
    assert!(SimulationEngine::new(side, side, EngineConfig::default()).is_err());
}

#[test]
fn test_snapshot_survives_transition() {
    let mut engine = seeded(10, 10);
    engine.load(r_pentomino());
    engine.start();
    let old = engine.snapshot();
    engine.advance();
    assert_eq!(*old.cells, r_pentomino());
    assert_eq!(old.generation, 0);
    assert_eq!(engine.generation(), 1);
    assert_ne!(*engine.grid(), *old.cells);
}

#[test]
fn test_step_ignores_state() {
    let mut engine = seeded(10, 10);
    engine.load(r_pentomino());
    engine.step();
    assert_eq!(engine.state(), SimState::Stopped);
    assert_eq!(engine.generation(), 1);
    assert_eq!(*engine.grid(), r_pentomino().transition());
}

#[test]
fn test_toggle_cell() {
    let mut engine = seeded(4, 4);
    let snapshot = engine.snapshot();
    assert!(engine.toggle_cell(1, 2));
    assert_eq!(engine.population(), 1);
    assert_eq!(engine.grid().get(1, 2), Some(Cell::Alive));
    // snapshots are never mutated in place
    assert_eq!(snapshot.cells.population(), 0);
    assert!(!engine.toggle_cell(4, 0));
    assert_eq!(engine.population(), 1);
}

#[test]
fn test_load_keeps_state() {
    let mut engine = seeded(4, 4);
    engine.start();
    engine.advance();
    engine.load(r_pentomino());
    assert_eq!(engine.state(), SimState::Running);
    assert_eq!((engine.rows(), engine.cols()), (10, 10));
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.population(), 5);
}
