//! Axis math: converting between 2D geometry and (main, cross) scalars.
//!
//! Horizontal flow: main = x/width, cross = y/height.
//! Vertical flow: main = y/height, cross = x/width.

use serde::{Deserialize, Serialize};

use crate::primitives::{Point, Rect, Size};

/// Direction of element flow in a stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// The perpendicular direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Horizontal)
    }

    /// Length of `size` along the main axis.
    #[inline]
    pub fn main_length(self, size: Size) -> f32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    /// Length of `size` along the cross axis.
    #[inline]
    pub fn cross_length(self, size: Size) -> f32 {
        self.opposite().main_length(size)
    }

    /// Coordinate of `point` along the main axis.
    #[inline]
    pub fn main_coordinate(self, point: Point) -> f32 {
        match self {
            Direction::Horizontal => point.x,
            Direction::Vertical => point.y,
        }
    }

    /// Coordinate of `point` along the cross axis.
    #[inline]
    pub fn cross_coordinate(self, point: Point) -> f32 {
        self.opposite().main_coordinate(point)
    }

    /// Split a size into `(main, cross)`.
    #[inline]
    pub fn split(self, size: Size) -> (f32, f32) {
        (self.main_length(size), self.cross_length(size))
    }

    /// Build a size from main and cross lengths.
    #[inline]
    pub fn make_size(self, main: f32, cross: f32) -> Size {
        match self {
            Direction::Horizontal => Size::new(main, cross),
            Direction::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main and cross coordinates.
    #[inline]
    pub fn make_point(self, main: f32, cross: f32) -> Point {
        match self {
            Direction::Horizontal => Point::new(main, cross),
            Direction::Vertical => Point::new(cross, main),
        }
    }

    /// Build a rect from main/cross coordinates and main/cross lengths.
    #[inline]
    pub fn make_rect(self, main: f32, cross: f32, main_len: f32, cross_len: f32) -> Rect {
        Rect::from_origin_size(self.make_point(main, cross), self.make_size(main_len, cross_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_mapping() {
        let d = Direction::Horizontal;
        let size = Size::new(100.0, 40.0);
        assert_eq!(d.main_length(size), 100.0);
        assert_eq!(d.cross_length(size), 40.0);
        assert_eq!(d.main_coordinate(Point::new(3.0, 7.0)), 3.0);
        assert_eq!(d.cross_coordinate(Point::new(3.0, 7.0)), 7.0);
    }

    #[test]
    fn test_vertical_mapping() {
        let d = Direction::Vertical;
        let size = Size::new(100.0, 40.0);
        assert_eq!(d.split(size), (40.0, 100.0));
        assert_eq!(d.main_coordinate(Point::new(3.0, 7.0)), 7.0);
        assert_eq!(d.cross_coordinate(Point::new(3.0, 7.0)), 3.0);
    }

    #[test]
    fn test_make_rect() {
        assert_eq!(
            Direction::Horizontal.make_rect(10.0, 2.0, 30.0, 5.0),
            Rect::new(10.0, 2.0, 30.0, 5.0)
        );
        assert_eq!(
            Direction::Vertical.make_rect(10.0, 2.0, 30.0, 5.0),
            Rect::new(2.0, 10.0, 5.0, 30.0)
        );
    }

    #[test]
    fn test_make_size_inverts_split() {
        for d in [Direction::Horizontal, Direction::Vertical] {
            let size = Size::new(12.0, 34.0);
            let (main, cross) = d.split(size);
            assert_eq!(d.make_size(main, cross), size);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Horizontal.opposite(), Direction::Vertical);
        assert!(!Direction::Horizontal.opposite().is_horizontal());
    }
}
