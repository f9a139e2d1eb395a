use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{AGE_CAP, Cell, LifeGrid};
use crate::ui::{
    Button, Dropdown, GRID_MARGIN, PANEL_WIDTH, Slider, fit_cell_size, grid_area_height, grid_area_width, panel_x,
};

/// Color of a newborn cell
const YOUNG_COLOR: Color = Color::new(0.0, 1.0, 0.6, 1.0);
/// Color of a cell at the age cap
const OLD_COLOR: Color = Color::new(0.85, 0.2, 0.9, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Baseline of the selected pattern's description, just below the pattern dropdown
const PATTERN_CAPTION_Y: f32 = 74.0;

/// Map an age ramp position in [0, 1] to a display color.
/// Zero is dead; anything alive blends from young to old.
pub fn age_color(ramp: f32) -> Color {
    if ramp <= 0.0 {
        return DEAD_COLOR;
    }
    let t = ramp.min(1.0);
    let lerp = |a: f32, b: f32| a + (b - a) * t;
    Color::new(
        lerp(YOUNG_COLOR.r, OLD_COLOR.r),
        lerp(YOUNG_COLOR.g, OLD_COLOR.g),
        lerp(YOUNG_COLOR.b, OLD_COLOR.b),
        1.0,
    )
}

/// Draw the grid centered in the grid area, one square per cell
pub fn draw_grid(grid: &LifeGrid) {
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let cell_size = fit_cell_size(area_width, area_height, grid.size());
    let extent = cell_size * grid.size() as f32;
    let origin_x = ((area_width - extent) / 2.0).max(GRID_MARGIN);
    let origin_y = ((area_height - extent) / 2.0).max(GRID_MARGIN);
    let draw_lines = cell_size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let x = origin_x + col as f32 * cell_size;
        let y = origin_y + row as f32 * cell_size;
        draw_rectangle(x, y, cell_size, cell_size, age_color(cell.age_ramp()));
        if draw_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel: buttons, sliders, stats and the pattern dropdown
pub fn draw_controls(
    sim: &Simulation,
    buttons: &[Button],
    sliders: &[(&Slider, String)],
    dropdown: &Dropdown,
    status: Option<&str>,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    sliders.iter().for_each(|(slider, text)| slider.draw(text));

    let px = panel_x() + 10.0;
    draw_text(sim.pattern.description, px, PATTERN_CAPTION_Y, 12.0, LIGHTGRAY);

    let labels = [
        ("Generation:", px, 470.0, 16.0, WHITE),
        (&format!("{}", sim.generation), px, 490.0, 20.0, YOUNG_COLOR),
        ("Population:", px, 520.0, 16.0, WHITE),
        (&format!("{}", sim.grid.population()), px, 540.0, 16.0, LIGHTGRAY),
        ("Status:", px, 570.0, 16.0, WHITE),
        (
            if sim.is_running { "Running" } else { "Paused" },
            px,
            590.0,
            16.0,
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Space: Play  N: Step", px, 630.0, 12.0, GRAY),
        ("R: Reseed  C: Clear", px, 645.0, 12.0, GRAY),
        ("Up/Down: Time step", px, 660.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    if let Some(message) = status {
        draw_text(message, px, 690.0, 12.0, Color::from_rgba(255, 90, 90, 255));
    }

    // Age legend
    for age in 1..=AGE_CAP {
        let x = px + (age - 1) as f32 * 22.0;
        draw_rectangle(x, 710.0, 18.0, 18.0, age_color(Cell::Alive(age).age_ramp()));
        draw_text(&age.to_string(), x + 5.0, 742.0, 14.0, GRAY);
    }

    // Drawn last so the open menu covers everything else
    dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cells_use_background_color() {
        assert_eq!(age_color(0.0), DEAD_COLOR);
    }

    fn close(a: Color, b: Color) -> bool {
        [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)]
            .iter()
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_ramp_endpoints() {
        assert!(close(age_color(1.0), OLD_COLOR));
        assert_ne!(age_color(0.001), DEAD_COLOR);
        assert_eq!(age_color(5.0), age_color(1.0));

        let newborn = age_color(0.25);
        assert!(newborn.g > age_color(0.75).g);
    }
}
