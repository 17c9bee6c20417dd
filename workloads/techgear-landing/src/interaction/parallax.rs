//! Pointer-driven parallax values.

use serde::{Deserialize, Serialize};

/// Maximum tilt in degrees at the edge of the element.
pub const MAX_TILT_DEG: f64 = 10.0;

/// Radius (px) of the features spotlight gradient.
pub const SPOTLIGHT_RADIUS: f64 = 200.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// 3D rotation applied to the hero image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// CSS transform value.
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg)",
            self.rotate_y, self.rotate_x
        )
    }
}

/// Tilt for a pointer over `rect`.
///
/// The pointer's offset from the rect centre, normalised by the rect size,
/// is scaled to [`MAX_TILT_DEG`]. Horizontal offset turns around the Y axis,
/// vertical offset turns around X (inverted). A degenerate rect yields no tilt.
pub fn tilt(pointer: Point, rect: Rect) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::default();
    }
    let x = (pointer.x - rect.left - rect.width / 2.0) / rect.width * MAX_TILT_DEG;
    let y = (pointer.y - rect.top - rect.height / 2.0) / rect.height * MAX_TILT_DEG;
    Tilt {
        rotate_x: -y,
        rotate_y: x,
    }
}

/// Pointer position relative to the section's top-left corner.
pub fn spotlight(pointer: Point, rect: Rect) -> Point {
    Point::new(pointer.x - rect.left, pointer.y - rect.top)
}
