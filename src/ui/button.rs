use macroquad::prelude::*;

use super::{Bounds, ButtonAction};

/// Panel button bound to one simulation action
#[derive(Clone)]
pub struct Button {
    bounds: Bounds,
    text: String,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(bounds: Bounds, text: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            bounds,
            text: text.into(),
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(mouse_pos)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Bounds { x, y, width, height } = self.bounds;
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(x, y, width, height, color);
        draw_rectangle_lines(x, y, width, height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            x + (width - text_size.width) / 2.0,
            y + (height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
