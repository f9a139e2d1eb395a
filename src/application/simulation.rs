use rand::{SeedableRng, rngs::StdRng};

use super::config::{SimulationConfig, clamp_time_step};
use crate::domain::{LifeError, LifeGrid, Pattern, presets};

/// Simulation orchestrates the Life grid over wall-clock time.
/// This is the application layer that coordinates domain logic:
/// it owns the grid, the seed pattern and the random source,
/// and turns frame deltas into generation steps.
pub struct Simulation {
    pub grid: LifeGrid,
    pub pattern: Pattern,
    pub is_running: bool,
    pub generation: u64,
    time_step: f32,
    time_accumulator: f32,
    rng: StdRng,
}

impl Simulation {
    /// Build the grid described by `config` and seed it
    pub fn new(config: &SimulationConfig) -> Result<Self, LifeError> {
        let pattern = presets::find(config.pattern)
            .ok_or_else(|| LifeError::UnknownPattern(config.pattern.to_owned()))?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut sim = Self {
            grid: LifeGrid::new(config.grid_size)?,
            pattern,
            is_running: config.start_running,
            generation: 0,
            time_step: clamp_time_step(config.time_step),
            time_accumulator: 0.0,
            rng,
        };
        sim.reseed()?;
        Ok(sim)
    }

    /// Seconds of frame time per generation
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    pub fn set_time_step(&mut self, secs: f32) {
        self.time_step = clamp_time_step(secs);
    }

    /// Adjust simulation speed by a delta in seconds
    pub fn adjust_time_step(&mut self, delta: f32) {
        self.set_time_step(self.time_step + delta);
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.time_accumulator = 0.0;
    }

    /// Re-apply the current pattern and reset the generation counter.
    /// Returns the seeded population.
    pub fn reseed(&mut self) -> Result<usize, LifeError> {
        let population = self.grid.seed(&self.pattern, &mut self.rng)?;
        self.generation = 0;
        self.time_accumulator = 0.0;
        Ok(population)
    }

    /// Switch to the named pattern and seed it.
    /// An unknown name leaves the simulation as it was.
    pub fn select_pattern(&mut self, name: &str) -> Result<usize, LifeError> {
        self.pattern = presets::find(name).ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))?;
        self.reseed()
    }

    /// Replace the grid with a fresh one of the given size, seeded with the current pattern
    pub fn resize_grid(&mut self, size: i32) -> Result<usize, LifeError> {
        self.grid = LifeGrid::new(size)?;
        self.reseed()
    }

    /// Advance exactly one generation, running or not
    pub fn step(&mut self) {
        self.grid.advance();
        self.generation += 1;
    }

    /// Update simulation by one frame.
    /// Advances at most one generation per call; leftover time
    /// carries over to the next interval.
    /// Non-finite or non-positive deltas are ignored.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running || !(delta_time.is_finite() && delta_time > 0.0) {
            return self;
        }

        self.time_accumulator += delta_time;

        if self.time_accumulator >= self.time_step {
            self.step();
            self.time_accumulator %= self.time_step;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(pattern: &'static str) -> Simulation {
        let config = SimulationConfig::default()
            .with_pattern(pattern)
            .with_rng_seed(7);
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn test_new_seeds_pattern() {
        let sim = seeded("cap");
        assert_eq!(sim.grid.size(), 20);
        assert_eq!(sim.grid.population(), 8);
        assert_eq!(sim.generation, 0);
        assert!(sim.is_running);
    }

    #[test]
    fn test_new_reports_bad_config() {
        let config = SimulationConfig::default().with_pattern("nope");
        assert_eq!(
            Simulation::new(&config).err(),
            Some(LifeError::UnknownPattern("nope".into()))
        );

        let config = SimulationConfig::default().with_grid_size(0);
        assert_eq!(
            Simulation::new(&config).err(),
            Some(LifeError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = seeded("random-25%");
        let b = seeded("random-25%");
        assert_eq!(a.grid, b.grid);
        assert!(a.grid.population() > 0);
    }

    #[test]
    fn test_tick_waits_for_time_step() {
        let mut sim = seeded("blinker");
        sim.set_time_step(0.5);

        sim = sim.tick(0.3);
        assert_eq!(sim.generation, 0);
        sim = sim.tick(0.3);
        assert_eq!(sim.generation, 1);
        assert!(sim.grid.is_alive(9, 10));
        assert!(sim.grid.is_alive(11, 10));
    }

    #[test]
    fn test_tick_advances_at_most_once_per_frame() {
        let mut sim = seeded("blinker");
        sim.set_time_step(0.5);

        sim = sim.tick(1.75);
        assert_eq!(sim.generation, 1);
        // 1.75 % 0.5 leaves 0.25 banked
        sim = sim.tick(0.25);
        assert_eq!(sim.generation, 2);
    }

    #[test]
    fn test_bad_frame_deltas_are_ignored() {
        let mut sim = seeded("blinker");
        sim.set_time_step(0.5);

        sim = sim.tick(f32::NAN).tick(f32::INFINITY).tick(-100.0);
        assert_eq!(sim.generation, 0);

        for _ in 0..3 {
            sim = sim.tick(1.0);
        }
        assert_eq!(sim.generation, 3);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut sim = seeded("blinker").with_running(false);
        let before = sim.grid.clone();

        sim = sim.tick(10.0);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.grid, before);

        sim.step();
        assert_eq!(sim.generation, 1);
        assert_ne!(sim.grid, before);
    }

    #[test]
    fn test_select_pattern() {
        let mut sim = seeded("cap");
        sim.step();

        assert_eq!(sim.select_pattern("teardrop"), Ok(9));
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.pattern.name, "teardrop");

        assert!(sim.select_pattern("pulsar").is_err());
        assert_eq!(sim.pattern.name, "teardrop");
        assert_eq!(sim.grid.population(), 9);
    }

    #[test]
    fn test_toggle_running() {
        let mut sim = seeded("cap");
        sim.toggle_running();
        assert!(!sim.is_running);
        sim.toggle_running();
        assert!(sim.is_running);
    }

    #[test]
    fn test_resize_and_clear() {
        let mut sim = seeded("test-pattern");
        assert_eq!(sim.resize_grid(30), Ok(14));
        assert_eq!(sim.grid.size(), 30);

        assert!(sim.resize_grid(-1).is_err());
        assert_eq!(sim.grid.size(), 30);

        sim.clear();
        assert_eq!(sim.grid.population(), 0);
    }

    #[test]
    fn test_time_step_is_clamped() {
        let mut sim = seeded("cap");
        sim.adjust_time_step(5.0);
        assert_eq!(sim.time_step(), 2.0);
        sim.adjust_time_step(-5.0);
        assert_eq!(sim.time_step(), 0.2);
    }
}
