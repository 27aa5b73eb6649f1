//! Shared types used across quadtile.
//! Includes `Quadrant` (the four tile positions) and `PixelBox`.
use serde::{Deserialize, Serialize};

/// One of the four tiles of a split image, numbered 1..=4 in reading order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// 1-based index used in output file names.
    pub fn index(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomLeft => 3,
            Quadrant::BottomRight => 4,
        }
    }

    pub fn is_right(self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quadrant::TopLeft => write!(f, "TopLeft"),
            Quadrant::TopRight => write!(f, "TopRight"),
            Quadrant::BottomLeft => write!(f, "BottomLeft"),
            Quadrant::BottomRight => write!(f, "BottomRight"),
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_indices_follow_reading_order() {
        let indices: Vec<u8> = Quadrant::ALL.iter().map(|q| q.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn quadrant_sides() {
        assert!(!Quadrant::TopLeft.is_right() && !Quadrant::TopLeft.is_bottom());
        assert!(Quadrant::TopRight.is_right() && !Quadrant::TopRight.is_bottom());
        assert!(!Quadrant::BottomLeft.is_right() && Quadrant::BottomLeft.is_bottom());
        assert!(Quadrant::BottomRight.is_right() && Quadrant::BottomRight.is_bottom());
    }

    #[test]
    fn pixel_box_contains_is_half_open() {
        let b = PixelBox::new(2, 3, 4, 5);
        assert!(b.contains(2, 3));
        assert!(b.contains(5, 7));
        assert!(!b.contains(6, 7));
        assert!(!b.contains(5, 8));
        assert_eq!(b.area(), 20);
        assert!(!b.is_square());
        assert!(PixelBox::new(0, 0, 7, 7).is_square());
    }
}
