use std::time::Duration;

use tracing::{debug, info};

use crate::domain::Grid;

pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Simulation orchestrates the driver loop around a single [`Grid`].
/// This is the application layer that coordinates domain logic.
///
/// The grid is only ever advanced through [`Simulation::advance`] or
/// [`Simulation::step`]; callers get shared access for rendering.
pub struct Simulation {
    grid: Grid,
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl Simulation {
    /// Create a running simulation that ticks once per `interval`
    pub fn new(grid: Grid, interval: Duration) -> Self {
        Self {
            grid,
            interval: interval.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL),
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        self.elapsed = Duration::ZERO;
        info!(running = self.running, generation = self.grid.generation(), "toggled simulation");
    }

    /// Account for `dt` of wall time; ticks once when the interval has
    /// elapsed. Returns whether a tick happened.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }

        self.grid.tick();
        self.elapsed = Duration::ZERO;
        true
    }

    /// Tick once regardless of pause state
    pub fn step(&mut self) {
        self.grid.tick();
        debug!(generation = self.grid.generation(), "stepped");
    }

    /// Discard the current grid and continue with `grid`
    pub fn replace_grid(&mut self, grid: Grid) {
        info!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            "replaced grid"
        );
        self.grid = grid;
        self.elapsed = Duration::ZERO;
    }

    /// Adjust the tick interval by `delta_ms`, clamped to a sane range
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let current = self.interval.as_millis() as i64;
        let next = Duration::from_millis((current + delta_ms).max(0) as u64);
        self.interval = next.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL);
        debug!(interval_ms = self.interval.as_millis() as u64, "adjusted interval");
    }
}
