// Domain layer - Life engine, cells, seed patterns
pub mod domain;

// Application layer - Simulation driver and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{AGE_CAP, Cell, LifeError, LifeGrid, Pattern, presets};
pub use application::{Simulation, SimulationConfig};
