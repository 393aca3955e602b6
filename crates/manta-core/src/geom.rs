pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Square box of half-extent `half` around `center`. Marker bounding boxes are
/// always expressed this way (center ± radius), so growing or shrinking a
/// marker never moves its center.
pub fn rect_centered(center: Point, half: f64) -> Rect {
    Rect::new(
        point(center.x - half, center.y - half),
        size(2.0 * half, 2.0 * half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_centered_keeps_center_under_resize() {
        let c = point(120.0, -40.0);
        let small = rect_centered(c, 30.0);
        let large = rect_centered(c, 100.0);
        assert_eq!(small.origin.x + small.size.width / 2.0, c.x);
        assert_eq!(large.origin.y + large.size.height / 2.0, c.y);
        assert_eq!(small.size.width, 60.0);
        assert_eq!(large.size.width, 200.0);
    }
}
