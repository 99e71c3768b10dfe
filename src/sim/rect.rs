//! Axis-aligned rectangle geometry for the field and paddles
//!
//! Screen coordinates: x grows to the right, y grows downward.
//! - right = left + width
//! - bottom = top + height
//! - containment includes the edges

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin, the shape a freshly resized widget reports
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center.x - half.x, center.y - half.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A field must have positive width and height before it can be played on
    pub fn is_playable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Edge-inclusive point test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 800.0, 600.0);
        assert_eq!(rect.right(), 810.0);
        assert_eq!(rect.bottom(), 620.0);
        assert_eq!(rect.center(), Vec2::new(410.0, 320.0));
    }

    #[test]
    fn test_from_center_size() {
        let paddle = Rect::from_center_size(Vec2::new(779.0, 300.0), Vec2::new(10.0, 100.0));
        assert_eq!(paddle.left, 774.0);
        assert_eq!(paddle.right(), 784.0);
        assert_eq!(paddle.top, 250.0);
        assert_eq!(paddle.bottom(), 350.0);
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 100.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 100.0)));
        assert!(rect.contains(Vec2::new(5.0, 50.0)));
        assert!(!rect.contains(Vec2::new(10.01, 50.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.01)));
    }

    #[test]
    fn test_playable() {
        assert!(Rect::from_size(800.0, 600.0).is_playable());
        assert!(!Rect::from_size(0.0, 600.0).is_playable());
        assert!(!Rect::from_size(800.0, -1.0).is_playable());
    }
}
