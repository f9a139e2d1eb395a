use macroquad::prelude::*;

use super::Bounds;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal slider over a bounded range, snapped to `step`
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f32, max: f32, step: f32) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            min,
            max,
            step,
            value: min,
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = self.snap(value);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn snap(&self, value: f32) -> f32 {
        let value = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return value;
        }
        let snapped = self.min + ((value - self.min) / self.step).round() * self.step;
        snapped.min(self.max)
    }

    /// Value under a cursor x coordinate
    pub fn value_at(&self, px: f32) -> f32 {
        let t = ((px - self.x) / self.width).clamp(0.0, 1.0);
        self.snap(self.min + t * (self.max - self.min))
    }

    /// Grab area around the track
    fn hit_area(&self) -> Bounds {
        Bounds::new(self.x - KNOB_RADIUS, self.y - KNOB_RADIUS, self.width + 2.0 * KNOB_RADIUS, 2.0 * KNOB_RADIUS)
    }

    /// Feed one frame of pointer state; returns true if the value changed
    pub fn drag(&mut self, mouse_pos: (f32, f32), pressed: bool, down: bool) -> bool {
        if pressed && self.hit_area().contains(mouse_pos) {
            self.dragging = true;
        }
        if !down {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let value = self.value_at(mouse_pos.0);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    /// Handle interaction for this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        self.drag(
            mouse_pos,
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
        )
    }

    /// Draw label, track and knob; `text` is the formatted value
    pub fn draw(&self, text: &str) {
        draw_text(&format!("{}: {}", self.label, text), self.x, self.y - 12.0, 14.0, GRAY);
        draw_rectangle(self.x, self.y - TRACK_HEIGHT / 2.0, self.width, TRACK_HEIGHT, Color::from_rgba(60, 60, 60, 255));

        let t = if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        };
        let knob_x = self.x + t * self.width;
        draw_rectangle(self.x, self.y - TRACK_HEIGHT / 2.0, knob_x - self.x, TRACK_HEIGHT, Color::from_rgba(70, 130, 180, 255));
        let knob_color = if self.dragging {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            WHITE
        };
        draw_circle(knob_x, self.y, KNOB_RADIUS, knob_color);
    }
}
