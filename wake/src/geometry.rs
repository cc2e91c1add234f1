//! Axis-aligned rectangles and inclusive containment tests.

use crate::fixed::{Fixed, FixedPoint};

/// An axis-aligned rectangle given by two corners.
///
/// Rectangles built by [`text_bounds`](crate::text::text_bounds) or
/// [`Rectangle::from_center`] are canonical (`top_left` is above and to the
/// left of `bottom_right`). Nothing stops a caller from building an inverted
/// one by hand; such a rectangle contains no point at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub top_left: FixedPoint,
    pub bottom_right: FixedPoint,
}

impl Rectangle {
    pub const fn new(top_left: FixedPoint, bottom_right: FixedPoint) -> Self {
        Self { top_left, bottom_right }
    }

    /// `half_extent` is expected to be non-negative on both axes.
    pub fn from_center(center: FixedPoint, half_extent: FixedPoint) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }

    pub fn left(&self) -> Fixed {
        self.top_left.x
    }

    pub fn right(&self) -> Fixed {
        self.bottom_right.x
    }

    pub fn top(&self) -> Fixed {
        self.top_left.y
    }

    pub fn bottom(&self) -> Fixed {
        self.bottom_right.y
    }

    pub fn width(&self) -> Fixed {
        self.right() - self.left()
    }

    pub fn height(&self) -> Fixed {
        self.bottom() - self.top()
    }

    pub fn center(&self) -> FixedPoint {
        FixedPoint::new(
            self.left() + self.width() / 2,
            self.top() + self.height() / 2,
        )
    }

    pub fn is_canonical(&self) -> bool {
        self.left() <= self.right() && self.top() <= self.bottom()
    }

    #[inline]
    pub fn contains(&self, point: FixedPoint) -> bool {
        point_in_rect(point, self)
    }
}

/// Inclusive on all four edges. No tolerance: values are compared exactly.
#[inline]
pub fn point_in_rect_scalar<T: PartialOrd>(x: T, y: T, left: T, right: T, top: T, bottom: T) -> bool {
    x >= left && x <= right && y >= top && y <= bottom
}

#[inline]
pub fn point_in_corners(point: FixedPoint, top_left: FixedPoint, bottom_right: FixedPoint) -> bool {
    point_in_rect_scalar(point.x, point.y, top_left.x, bottom_right.x, top_left.y, bottom_right.y)
}

#[inline]
pub fn point_in_rect(point: FixedPoint, rect: &Rectangle) -> bool {
    point_in_corners(point, rect.top_left, rect.bottom_right)
}
