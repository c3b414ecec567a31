//! Outline geometry for drawing
//!
//! Outlines live in local space. A canvas draws them as closed line loops
//! under a translate/rotate transform; GPU-style consumers can ask for the
//! loop already transformed into world space instead.

use glam::{Affine2, Vec2};

use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::sim::{Body, Vector2, World};

/// Flatten points into `(x0, y0, x1, y1, ...)`
pub fn flatten(points: &[Vector2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Check that a flat coordinate list pairs up into points
pub fn validate_coordinates(coordinates: &[f32]) -> Result<()> {
    if coordinates.len() % 2 != 0 {
        return Err(Error::Validation(format!(
            "coordinates must be a sequence of (x, y) pairs, got {} values",
            coordinates.len()
        )));
    }
    if coordinates.iter().any(|c| !c.is_finite()) {
        return Err(Error::Validation("coordinates must be finite".to_string()));
    }
    Ok(())
}

/// Close a flat coordinate list by repeating its first point
pub fn close_loop(coordinates: &[f32]) -> Result<Vec<f32>> {
    validate_coordinates(coordinates)?;
    let mut closed = Vec::with_capacity(coordinates.len() + 2);
    closed.extend_from_slice(coordinates);
    closed.extend_from_slice(&coordinates[..coordinates.len().min(2)]);
    Ok(closed)
}

/// Local-to-world transform for a body: rotate by orientation, then translate
pub fn body_transform(body: &Body) -> Affine2 {
    Affine2::from_angle_translation(body.orientation.to_radians(), body.position.into())
}

/// Outline points in world space
pub fn world_outline(body: &Body) -> Vec<Vector2> {
    let transform = body_transform(body);
    body.outline()
        .iter()
        .map(|&p| Vector2::from(transform.transform_point2(Vec2::from(p))))
        .collect()
}

/// World-space closed loop of vertices for one body
pub fn line_loop_vertices(body: &Body) -> Vec<Vertex> {
    let points = world_outline(body);
    let mut vertices: Vec<Vertex> = points.iter().map(|&p| Vertex::at(p, body.color)).collect();
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}

/// Line loops for every live entity, one vertex list per entity
pub fn world_line_loops(world: &World) -> Vec<Vec<Vertex>> {
    world.bodies().map(|(_, body)| line_loop_vertices(body)).collect()
}
