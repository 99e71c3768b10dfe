//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left, rect.top, rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Dash rectangles along a vertical line from `from` down to `to_y`
///
/// Dash and gap lengths are multiples of the pen width, as a dashed
/// toolkit pen draws them.
pub fn dashed_vline(from: Vec2, to_y: f32, width: f32, dash: f32, gap: f32) -> Vec<Rect> {
    let mut dashes = Vec::new();
    if dash <= 0.0 {
        return dashes;
    }

    let mut y = from.y;
    while y < to_y {
        let end = (y + dash).min(to_y);
        dashes.push(Rect::new(from.x - width / 2.0, y, width, end - y));
        y += dash + gap;
    }
    dashes
}
