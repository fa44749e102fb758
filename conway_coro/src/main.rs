// main.rs - Headless Conway's Game of Life driven by row coroutines
//
// Settings come from CONWAY_* environment variables (see `SimConfig`).

use anyhow::Context;
use conway::SimConfig;
use conway_coro::Simulation;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from_env().context("invalid simulation settings")?;
    let grid = config.build_grid().context("failed to seed initial grid")?;
    info!(
        "{}x{} grid, {:?} seed, {} cells alive",
        config.grid_size,
        config.grid_size,
        config.seed,
        grid.population()
    );

    let mut sim = Simulation::new(grid);
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let repeated = sim.step().await;
        info!(
            "generation {}: {} alive",
            sim.generation(),
            sim.grid().population()
        );

        if repeated {
            info!("cycle detected at generation {}, stopping", sim.generation());
            break;
        }
        if config.generations.is_some_and(|limit| sim.generation() >= limit) {
            break;
        }
    }
    Ok(())
}
