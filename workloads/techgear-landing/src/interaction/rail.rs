//! Horizontal scroll position of the product rail.

use serde::{Deserialize, Serialize};

/// Pixels moved per arrow click.
pub const RAIL_STEP: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailDirection {
    Left,
    Right,
}

/// Scroll offset over a rail of `items` cards, one step wide each.
///
/// The offset stays within `0..=max_offset`, where the last card is
/// scrolled to the left edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProductRail {
    offset: f64,
    max_offset: f64,
}

impl ProductRail {
    pub fn new(items: usize) -> Self {
        Self {
            offset: 0.0,
            max_offset: items.saturating_sub(1) as f64 * RAIL_STEP,
        }
    }

    /// Move one step, clamped to both ends of the rail.
    pub fn scroll(&mut self, direction: RailDirection) -> f64 {
        self.offset = match direction {
            RailDirection::Left => (self.offset - RAIL_STEP).max(0.0),
            RailDirection::Right => (self.offset + RAIL_STEP).min(self.max_offset),
        };
        self.offset
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_steps_and_clamps() {
        let mut rail = ProductRail::new(3);
        assert_eq!(rail.scroll(RailDirection::Left), 0.0);
        assert_eq!(rail.scroll(RailDirection::Right), 320.0);
        assert_eq!(rail.scroll(RailDirection::Right), 640.0);
        assert_eq!(rail.scroll(RailDirection::Right), 640.0);
        assert_eq!(rail.scroll(RailDirection::Left), 320.0);
    }

    #[test]
    fn test_short_rail_does_not_move() {
        let mut rail = ProductRail::new(1);
        assert_eq!(rail.scroll(RailDirection::Right), 0.0);

        let mut empty = ProductRail::new(0);
        assert_eq!(empty.scroll(RailDirection::Right), 0.0);
    }
}
