use bounded_life::{EngineConfig, NiceInt, SimulationEngine};
use std::time::Instant;

const ROWS: usize = 40;
const COLS: usize = 64;
const GENERATIONS: u64 = 1000;
const REPORT_EVERY: u64 = 100;
const DEFAULT_SEED: u64 = 42;

fn main() -> bounded_life::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = EngineConfig::from_env()?;
    if config.seed.is_none() {
        config = config.with_seed(DEFAULT_SEED);
    }
    let mut engine = SimulationEngine::new(ROWS, COLS, config)?;
    engine.start();

    let timer = Instant::now();
    while engine.generation() < GENERATIONS {
        engine.advance();
        if engine.generation() % REPORT_EVERY == 0 {
            log::info!(
                "Generation {}: population {}",
                NiceInt::from(engine.generation()),
                NiceInt::from_usize(engine.population())
            );
        }
        if engine.population() == 0 {
            log::info!("Population died out at generation {}", engine.generation());
            break;
        }
    }
    println!(
        "Time on {} generations: {:?}",
        engine.generation(),
        timer.elapsed()
    );
    print!("{}", engine.grid());
    Ok(())
}
