//! Rendering boundary
//!
//! The core never writes pixels. It walks the live entities and issues
//! transform and line-loop calls against a [`Canvas`] supplied by the host.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::ScoreLabel;
pub use vertex::Vertex;

use crate::error::Result;
use crate::sim::{Body, Color, World};

/// Drawing surface provided by the host (an OpenGL-style 2D context)
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]);
    /// Push the current transform
    fn save(&mut self);
    /// Pop the last pushed transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate the current transform by `degrees`
    fn rotate(&mut self, degrees: f32);
    fn set_color(&mut self, color: [f32; 4]);
    /// Draw an open polyline from flat `(x, y)` pairs
    fn draw_line_strip(&mut self, coordinates: &[f32], width: f32, smooth: bool);
    /// Draw text at the current origin; `changed` is set when the text differs
    /// from the last call so a cached texture can be rebuilt
    fn draw_text(&mut self, text: &str, changed: bool);
    /// Finish the frame
    fn present(&mut self);
}

/// Draw a closed loop through flat `(x, y)` pairs
pub fn draw_line_loop<C: Canvas + ?Sized>(
    canvas: &mut C,
    coordinates: &[f32],
    width: f32,
    smooth: bool,
) -> Result<()> {
    let closed = shapes::close_loop(coordinates)?;
    canvas.draw_line_strip(&closed, width, smooth);
    Ok(())
}

/// Draw one entity: anti-aliased pass, then a crisp pass on top
pub fn draw_body<C: Canvas + ?Sized>(canvas: &mut C, body: &Body) -> Result<()> {
    let coordinates = shapes::flatten(body.outline());
    canvas.save();
    canvas.translate(body.position.x, body.position.y);
    canvas.rotate(body.orientation);
    canvas.set_color(body.color.to_rgba());
    let result = draw_line_loop(canvas, &coordinates, 1.0, true)
        .and_then(|()| draw_line_loop(canvas, &coordinates, 1.0, false));
    canvas.restore();
    result
}

/// Draw a full frame: background, every entity, the score label
pub fn draw_world<C: Canvas + ?Sized>(canvas: &mut C, world: &World, label: &mut ScoreLabel) -> Result<()> {
    canvas.clear(Color::BACKGROUND.to_rgba());
    for (_, body) in world.bodies() {
        draw_body(canvas, body)?;
    }
    label.set_value(world.score);
    label.draw(canvas);
    canvas.present();
    Ok(())
}
