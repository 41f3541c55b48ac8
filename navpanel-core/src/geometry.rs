/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Return whether `point` lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive, so adjacent rectangles never both claim a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Area of the rectangle, treating negative extents as empty.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Pull the bottom edge in by `margin`, clamping at zero height.
    pub fn shrink_bottom(&self, margin: f32) -> Rect {
        Rect::new(self.x, self.y, self.width, (self.height - margin).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn given_point_on_right_edge_when_contains_then_point_is_outside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);

        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(99.9, 49.9)));
        assert!(!rect.contains(Point::new(100.0, 10.0)));
        assert!(!rect.contains(Point::new(10.0, 50.0)));
    }

    #[test]
    fn given_overlapping_rects_when_intersection_then_returns_shared_region() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);

        let shared = a.intersection(&b).expect("rects should overlap");

        assert_eq!(shared, Rect::new(50.0, 80.0, 50.0, 20.0));
        assert!((shared.area() - 1000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_touching_rects_when_intersection_then_returns_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn given_margin_larger_than_height_when_shrink_bottom_then_height_is_zero()
    {
        let rect = Rect::new(0.0, 0.0, 10.0, 30.0);

        assert_eq!(rect.shrink_bottom(50.0).height, 0.0);
        assert_eq!(rect.shrink_bottom(10.0).height, 20.0);
    }
}
