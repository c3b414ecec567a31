//! Score label

use super::Canvas;
use crate::sim::{Color, Vector2};

/// Text label that re-renders only when its value changes
#[derive(Debug, Clone)]
pub struct ScoreLabel {
    pub position: Vector2,
    template: String,
    text: String,
    value: Option<u64>,
    /// Set when `text` changed since the last draw
    dirty: bool,
}

impl ScoreLabel {
    /// Label whose `template` has one `{}` placeholder for the score
    pub fn new(position: Vector2, template: impl Into<String>) -> Self {
        Self {
            position,
            template: template.into(),
            text: String::new(),
            value: None,
            dirty: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update the shown value. Returns true when the text changed.
    pub fn set_value(&mut self, value: u64) -> bool {
        if self.value == Some(value) {
            return false;
        }
        self.value = Some(value);
        let text = self.template.replacen("{}", &value.to_string(), 1);
        let changed = text != self.text;
        if changed {
            self.text = text;
            self.dirty = true;
        }
        changed
    }

    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.save();
        canvas.translate(self.position.x, self.position.y);
        canvas.set_color(Color::LABEL.to_rgba());
        canvas.draw_text(&self.text, self.dirty);
        canvas.restore();
        self.dirty = false;
    }
}

impl Default for ScoreLabel {
    fn default() -> Self {
        let mut label = Self::new(Vector2::new(10.0, 10.0), "scores: {}");
        label.set_value(0);
        label
    }
}
