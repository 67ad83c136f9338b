//! Performance benchmark comparing serial and parallel ticks

use std::time::Instant;

use anyhow::Result;
use conway_life::Grid;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn benchmark_serial(size: usize, iterations: u32) -> Result<f64> {
    let mut grid = Grid::seeded(size, size, FILL_RATE, SEED)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_parallel(size: usize, iterations: u32) -> Result<f64> {
    let mut grid = Grid::seeded(size, size, FILL_RATE, SEED)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.tick_parallel();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Run both variants side by side and check they agree
fn verify(size: usize, generations: u64) -> Result<bool> {
    let mut serial = Grid::seeded(size, size, FILL_RATE, SEED)?;
    let mut parallel = serial.clone();
    for _ in 0..generations {
        serial.tick();
        parallel.tick_parallel();
    }
    Ok(serial.current_state() == parallel.current_state())
}

fn main() -> Result<()> {
    println!("Game of Life tick benchmark (ms per generation)");
    println!("{:>8} {:>12} {:>12} {:>9}", "size", "serial", "parallel", "speedup");

    for &(size, iterations) in &[(100, 200), (500, 40), (1000, 10), (2000, 4)] {
        let serial = benchmark_serial(size, iterations)?;
        let parallel = benchmark_parallel(size, iterations)?;
        println!(
            "{:>8} {:>12.3} {:>12.3} {:>8.2}x",
            format!("{}²", size),
            serial,
            parallel,
            serial / parallel
        );
    }

    let agree = verify(256, 50)?;
    println!("\nserial/parallel agree after 50 generations: {}", agree);
    anyhow::ensure!(agree, "parallel tick diverged from serial tick");
    Ok(())
}
