use std::ops::RangeInclusive;

/// Grid side lengths the viewer offers
pub const GRID_SIZE_RANGE: RangeInclusive<i32> = 10..=50;

/// Seconds between generations the viewer offers
pub const TIME_STEP_RANGE: RangeInclusive<f32> = 0.2..=2.0;

/// Simulation settings
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Seconds of frame time per generation
    pub time_step: f32,
    /// Name of the seed pattern, see `presets::all_patterns`
    pub pattern: &'static str,
    /// Fixed RNG seed for reproducible random patterns; None seeds from the OS
    pub rng_seed: Option<u64>,
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            time_step: 1.0,
            pattern: "random-25%",
            rng_seed: None,
            start_running: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_running(mut self, running: bool) -> Self {
        self.start_running = running;
        self
    }

    /// Force grid size and time step into the viewer's ranges
    pub fn clamped(mut self) -> Self {
        self.grid_size = self
            .grid_size
            .clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self.time_step = clamp_time_step(self.time_step);
        self
    }
}

/// Clamp a time step into [`TIME_STEP_RANGE`]; NaN falls back to the slowest step
pub fn clamp_time_step(secs: f32) -> f32 {
    if secs.is_nan() {
        return *TIME_STEP_RANGE.end();
    }
    secs.clamp(*TIME_STEP_RANGE.start(), *TIME_STEP_RANGE.end())
}
