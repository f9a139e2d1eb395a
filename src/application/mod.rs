mod config;
mod simulation;

pub use config::{GRID_SIZE_RANGE, SimulationConfig, TIME_STEP_RANGE, clamp_time_step};
pub use simulation::Simulation;
