use macroquad::prelude::*;

use super::Bounds;

const ROW_HEIGHT: f32 = 28.0;

/// Dropdown selector for seed patterns
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Select the item with this text, if present
    pub fn select_item(&mut self, item: &str) {
        if let Some(index) = self.items.iter().position(|i| i == item) {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn header(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, ROW_HEIGHT)
    }

    fn item_bounds(&self, index: usize) -> Bounds {
        Bounds::new(self.x, self.y + ROW_HEIGHT * (index + 1) as f32, self.width, ROW_HEIGHT)
    }

    /// Index of the open menu row under the cursor
    fn hovered_item(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        (0..self.items.len()).find(|&i| self.item_bounds(i).contains(mouse_pos))
    }

    /// Handle a click and return true if the selection changed
    pub fn handle_click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.header().contains(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        let picked = self.hovered_item(mouse_pos);
        self.is_open = false;
        match picked {
            Some(index) if index != self.selected => {
                self.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Handle interaction for this frame and return true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.handle_click(mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.header();
        let header_color = if header.contains(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(header.x, header.y, header.width, header.height, header_color);
        draw_rectangle_lines(header.x, header.y, header.width, header.height, 2.0, WHITE);

        let text = self.selected_item().unwrap_or("-");
        draw_text(text, header.x + 5.0, header.y + 19.0, 16.0, WHITE);
        draw_text(if self.is_open { "^" } else { "v" }, header.x + header.width - 16.0, header.y + 19.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.hovered_item(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_bounds(i);
            let color = if hovered == Some(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.width, row.height, color);
            draw_rectangle_lines(row.x, row.y, row.width, row.height, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(item, row.x + 5.0, row.y + 19.0, 16.0, WHITE);
        }
    }
}
