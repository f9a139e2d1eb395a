mod button;
mod dropdown;
mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Gap between the grid and the window edge
pub const GRID_MARGIN: f32 = 10.0;

/// Axis-aligned screen rectangle used for hit testing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Side length of one cell so that a `grid_size` grid fits the area
pub fn fit_cell_size(area_width: f32, area_height: f32, grid_size: usize) -> f32 {
    if grid_size == 0 {
        return 0.0;
    }
    let usable = (area_width.min(area_height) - 2.0 * GRID_MARGIN).max(0.0);
    (usable / grid_size as f32).floor().max(1.0)
}

/// What each panel button does, in panel order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    Reseed,
    Clear,
}

pub const BUTTON_ACTIONS: [(ButtonAction, &str); 4] = [
    (ButtonAction::PlayPause, "Play/Pause"),
    (ButtonAction::Step, "Step"),
    (ButtonAction::Reseed, "Reseed"),
    (ButtonAction::Clear, "Clear"),
];

/// Vertical position of the first button
const BUTTONS_TOP: f32 = 200.0;

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    BUTTON_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, &(action, label))| {
            let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + 8.0);
            Button::new(Bounds::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT), label, action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert!(b.contains((10.0, 20.0)));
        assert!(b.contains((40.0, 60.0)));
        assert!(!b.contains((9.9, 30.0)));
        assert!(!b.contains((20.0, 60.1)));
    }

    #[test]
    fn test_fit_cell_size() {
        // 600 - 2 * margin = 580 over 20 cells
        assert_eq!(fit_cell_size(800.0, 600.0, 20), 29.0);
        assert_eq!(fit_cell_size(30.0, 30.0, 50), 1.0);
        assert_eq!(fit_cell_size(800.0, 600.0, 0), 0.0);
    }
}
