//! Screen rectangles: raw drag corners and their normalized form.

use serde::Serialize;

/// Two corner points exactly as the drag gesture produced them.
///
/// The anchor is where the pointer went down, the end is where it was
/// released. Either corner may be the top-left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRegion {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RawRegion {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn normalize(self) -> Region {
        Region::from_corners(self.x1, self.y1, self.x2, self.y2)
    }
}

/// A screen rectangle in pixels with `x1 <= x2` and `y1 <= y2`.
///
/// Fields are private so every `Region` in the program went through
/// [`Region::from_corners`]. Zero-width and zero-height regions are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Region {
    /// Sort two arbitrary corners into top-left / bottom-right.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x2
    }

    pub fn y2(&self) -> i32 {
        self.y2
    }

    /// `(x1, y1, x2, y2)`
    pub fn corners(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x2)
    }

    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y2)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({},{})",
            self.width(),
            self.height(),
            self.x1,
            self.y1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height_follow_corners() {
        let region = Region::from_corners(-20, 5, 40, 45);
        assert_eq!(region.width(), 60);
        assert_eq!(region.height(), 40);
        assert!(!region.is_empty());
    }

    #[test]
    fn zero_width_region_is_empty() {
        let region = Region::from_corners(12, 0, 12, 300);
        assert_eq!(region.width(), 0);
        assert!(region.is_empty());
    }

    #[test]
    fn raw_region_normalizes_through_from_corners() {
        let raw = RawRegion::new(300, 10, 100, 90);
        assert_eq!(raw.normalize(), Region::from_corners(100, 10, 300, 90));
        assert_eq!(raw.normalize().corners(), (100, 10, 300, 90));
    }

    #[test]
    fn display_reports_size_and_origin() {
        let region = Region::from_corners(10, 20, 50, 80);
        assert_eq!(region.to_string(), "40x60 at (10,20)");
    }

    #[test]
    fn serializes_corner_fields() {
        let json = serde_json::to_value(Region::from_corners(5, 6, 1, 2)).unwrap();
        assert_eq!(json, serde_json::json!({"x1": 1, "y1": 2, "x2": 5, "y2": 6}));
    }
}
