use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::LifeError;
use crate::ui::{Button, ButtonAction};

/// Time step change per Up/Down key press, in seconds
const TIME_STEP_NUDGE: f32 = 0.1;

/// Apply one panel action to the simulation
pub fn apply_action(sim: &mut Simulation, action: ButtonAction) -> Result<(), LifeError> {
    match action {
        ButtonAction::PlayPause => sim.toggle_running(),
        ButtonAction::Step => sim.step(),
        ButtonAction::Reseed => {
            sim.reseed()?;
        }
        ButtonAction::Clear => sim.clear(),
    }
    Ok(())
}

/// Process keyboard input
pub fn process_keyboard_input(sim: &mut Simulation) -> Result<(), LifeError> {
    let bindings = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::R, ButtonAction::Reseed),
        (KeyCode::C, ButtonAction::Clear),
    ];

    for (key, action) in bindings {
        if is_key_pressed(key) {
            apply_action(sim, action)?;
        }
    }

    if is_key_pressed(KeyCode::Up) {
        sim.adjust_time_step(TIME_STEP_NUDGE);
    }
    if is_key_pressed(KeyCode::Down) {
        sim.adjust_time_step(-TIME_STEP_NUDGE);
    }

    Ok(())
}

/// Process button clicks
pub fn process_button_clicks(
    sim: &mut Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Result<(), LifeError> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .try_for_each(|btn| apply_action(sim, btn.action()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;

    fn paused_blinker() -> Simulation {
        let config = SimulationConfig::default()
            .with_pattern("blinker")
            .with_rng_seed(3)
            .with_running(false);
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn test_step_and_reseed_actions() {
        let mut sim = paused_blinker();
        apply_action(&mut sim, ButtonAction::Step).unwrap();
        assert_eq!(sim.generation, 1);
        assert!(sim.grid.is_alive(9, 10));

        apply_action(&mut sim, ButtonAction::Reseed).unwrap();
        assert_eq!(sim.generation, 0);
        assert!(sim.grid.is_alive(10, 9));
    }

    #[test]
    fn test_play_pause_and_clear_actions() {
        let mut sim = paused_blinker();
        apply_action(&mut sim, ButtonAction::PlayPause).unwrap();
        assert!(sim.is_running);

        apply_action(&mut sim, ButtonAction::Clear).unwrap();
        assert_eq!(sim.grid.population(), 0);
    }
}
