mod simulation;

pub use simulation::{Simulation, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL};
