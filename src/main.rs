use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conway_life::{
    Settings, Simulation,
    config::{DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS},
    domain::DEFAULT_SEED_PROBABILITY,
    input::{self, InputOutcome},
    rendering::{self, MacroquadSurface},
};
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life")]
#[command(version)]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    height: usize,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: f32,

    /// Chance of each cell starting alive
    #[arg(short, long, default_value_t = DEFAULT_SEED_PROBABILITY)]
    probability: f64,

    /// Fixed RNG seed for a reproducible start
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    interval_ms: u64,

    /// Start from a named preset (block, blinker, glider, ...) instead of noise
    #[arg(long)]
    pattern: Option<String>,

    /// Start paused
    #[arg(long)]
    paused: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            cell_size: cli.cell_size,
            seed_probability: cli.probability,
            seed: cli.seed,
            tick_interval_ms: cli.interval_ms,
            pattern: cli.pattern,
            start_paused: cli.paused,
        }
    }
}

fn window_conf(settings: &Settings) -> Conf {
    let (width, height) = settings.window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width.round() as i32,
        window_height: height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(settings: Settings, mut sim: Simulation) {
    let mut surface = MacroquadSurface::default();

    loop {
        if input::process_keyboard_input(&mut sim, &settings) == InputOutcome::Quit {
            info!(generation = sim.grid().generation(), "quitting");
            break;
        }

        clear_background(surface.dead);
        rendering::draw_grid(sim.grid().current_state(), &mut surface, settings.cell_size);
        rendering::draw_status(&sim, 8.0, 20.0);

        sim.advance(Duration::from_secs_f32(get_frame_time()));

        next_frame().await;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from(Cli::parse());
    settings.validate().context("invalid settings")?;

    let grid = settings.build_grid().context("failed to create grid")?;
    info!(
        width = settings.width,
        height = settings.height,
        population = grid.population(),
        interval_ms = settings.tick_interval_ms,
        "starting simulation"
    );

    let sim = Simulation::new(grid, settings.tick_interval()).with_running(!settings.start_paused);
    macroquad::Window::from_config(window_conf(&settings), run(settings, sim));
    Ok(())
}
