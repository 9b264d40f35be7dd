//! Geometric primitives for placing cards and glyphs on the page.
//!
//! - [`Point`] - A 2D coordinate in page space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box, usually built around a center point
//! - [`Insets`] - Padding on the four sides of a box
//!
//! Coordinates follow SVG: the origin is the top-left corner of the page,
//! `x` grows to the right and `y` grows downwards.

/// A position on the page.
///
/// Drawables are placed by their center, so a point together with a
/// [`Size`] describes where an element sits:
///
/// ```
/// # use pelt_core::geometry::{Point, Size};
/// let bounds = Point::new(100.0, 50.0).to_bounds(Size::new(40.0, 40.0));
/// assert_eq!(bounds.min_x(), 80.0);
/// assert_eq!(bounds.max_y(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the box of `size` centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Grows the size by the padding on every side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Padding around the content of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Same padding on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Left plus right padding.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom padding.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..500.0, 0.0f32..500.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// Bounds built around a center keep the size and contain the center.
    fn check_centered_bounds(center: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = center.to_bounds(size);

        prop_assert!(approx_eq!(f32, bounds.width(), size.width(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, bounds.height(), size.height(), epsilon = 0.01));
        prop_assert!(bounds.min_x() <= center.x() && center.x() <= bounds.max_x());
        prop_assert!(bounds.min_y() <= center.y() && center.y() <= bounds.max_y());
        Ok(())
    }

    proptest! {
        #[test]
        fn centered_bounds(center in point_strategy(), size in size_strategy()) {
            check_centered_bounds(center, size)?;
        }
    }
}
