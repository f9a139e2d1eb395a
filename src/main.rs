use macroquad::prelude::*;
use life_grid::{
    Simulation, SimulationConfig, presets,
    application::{GRID_SIZE_RANGE, TIME_STEP_RANGE},
    ui::{self, Dropdown, Slider},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Slider and dropdown rows in the panel
const PATTERN_Y: f32 = 30.0;
const TIME_STEP_Y: f32 = 100.0;
const GRID_SIZE_Y: f32 = 150.0;

#[macroquad::main(window_conf)]
async fn main() {
    let config = SimulationConfig::default().clamped();
    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("failed to start simulation: {err}");
            return;
        }
    };
    let mut status: Option<String> = None;

    let px = ui::panel_x() + 10.0;
    let widget_width = ui::PANEL_WIDTH - 20.0;

    let pattern_items: Vec<String> = presets::all_patterns()
        .iter()
        .map(|p| p.name.to_string())
        .collect();
    let mut pattern_dropdown = Dropdown::new(px, PATTERN_Y, widget_width, "Pattern", pattern_items);
    pattern_dropdown.select_item(sim.pattern.name);

    let mut time_slider = Slider::new(
        px,
        TIME_STEP_Y,
        widget_width,
        "Time step",
        *TIME_STEP_RANGE.start(),
        *TIME_STEP_RANGE.end(),
        0.1,
    );
    time_slider.set_value(sim.time_step());

    let mut size_slider = Slider::new(
        px,
        GRID_SIZE_Y,
        widget_width,
        "Grid size",
        *GRID_SIZE_RANGE.start() as f32,
        *GRID_SIZE_RANGE.end() as f32,
        1.0,
    );
    size_slider.set_value(sim.grid.size() as f32);

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x() + 10.0;
        pattern_dropdown.set_position(px, PATTERN_Y);
        time_slider.set_position(px, TIME_STEP_Y);
        size_slider.set_position(px, GRID_SIZE_Y);

        let buttons = ui::create_buttons();

        // An open menu swallows the click so widgets beneath it stay inert
        let menu_was_open = pattern_dropdown.is_open();
        if pattern_dropdown.update(mouse_pos) {
            if let Some(name) = pattern_dropdown.selected_item() {
                status = sim.select_pattern(name).err().map(|err| err.to_string());
            }
        }

        if !menu_was_open && !pattern_dropdown.is_open() {
            if time_slider.update(mouse_pos) {
                sim.set_time_step(time_slider.value());
            }
            if size_slider.update(mouse_pos) {
                status = sim
                    .resize_grid(size_slider.value() as i32)
                    .err()
                    .map(|err| err.to_string());
            }
            if let Err(err) = input::process_button_clicks(&mut sim, &buttons, mouse_pos) {
                status = Some(err.to_string());
            }
        }

        if let Err(err) = input::process_keyboard_input(&mut sim) {
            status = Some(err.to_string());
        }
        time_slider.set_value(sim.time_step());

        sim = sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&sim.grid);

        let sliders = [
            (&time_slider, format!("{:.1}s", sim.time_step())),
            (&size_slider, format!("{0}x{0}", sim.grid.size())),
        ];
        rendering::draw_controls(&sim, &buttons, &sliders, &pattern_dropdown, status.as_deref(), mouse_pos);

        next_frame().await;
    }
}
