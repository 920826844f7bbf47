//! Grid coordinates and directions
//!
//! Positions are signed so an accepted move may sit one tile past the edge
//! until the next tick wraps it back onto the board.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A tile coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    /// Player spawn tile
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `delta` without any bounds handling
    #[inline]
    pub fn translate(self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// Wrap off-board coordinates to the opposite edge
    ///
    /// Each axis is handled independently: below zero goes to the last
    /// tile, at or past the size goes to zero.
    pub fn wrap(self, columns: i32, rows: i32) -> Self {
        Self::new(wrap_axis(self.x, columns), wrap_axis(self.y, rows))
    }

    /// Nearest in-bounds coordinate (the tile the player stepped off from)
    pub fn clamp_to(self, columns: i32, rows: i32) -> Self {
        Self::new(self.x.clamp(0, columns - 1), self.y.clamp(0, rows - 1))
    }

    pub fn in_bounds(self, columns: i32, rows: i32) -> bool {
        (0..columns).contains(&self.x) && (0..rows).contains(&self.y)
    }
}

#[inline]
fn wrap_axis(v: i32, size: i32) -> i32 {
    if v < 0 {
        size - 1
    } else if v >= size {
        0
    } else {
        v
    }
}

/// Movement direction (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_translate() {
        let p = GridPosition::new(3, 4);
        assert_eq!(p.translate(Direction::Right.delta()), GridPosition::new(4, 4));
        assert_eq!(p.translate(Direction::Up.delta()), GridPosition::new(3, 3));
        assert_eq!(p.translate(IVec2::new(-5, 2)), GridPosition::new(-2, 6));
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(GridPosition::new(-1, 0).wrap(20, 15), GridPosition::new(19, 0));
        assert_eq!(GridPosition::new(20, 3).wrap(20, 15), GridPosition::new(0, 3));
        assert_eq!(GridPosition::new(4, -1).wrap(20, 15), GridPosition::new(4, 14));
        assert_eq!(GridPosition::new(4, 15).wrap(20, 15), GridPosition::new(4, 0));
        assert_eq!(GridPosition::new(-1, 15).wrap(20, 15), GridPosition::new(19, 0));
        // In-bounds positions are untouched
        assert_eq!(GridPosition::new(7, 7).wrap(20, 15), GridPosition::new(7, 7));
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(GridPosition::new(-1, 5).clamp_to(20, 15), GridPosition::new(0, 5));
        assert_eq!(GridPosition::new(20, 15).clamp_to(20, 15), GridPosition::new(19, 14));
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_in_bounds(x in -1i32..=20, y in -1i32..=15) {
            let wrapped = GridPosition::new(x, y).wrap(20, 15);
            prop_assert!(wrapped.in_bounds(20, 15));
        }

        #[test]
        fn prop_one_step_from_board_wraps_in_bounds(
            x in 0i32..20,
            y in 0i32..15,
            dir in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let moved = GridPosition::new(x, y).translate(dir.delta());
            prop_assert!(moved.wrap(20, 15).in_bounds(20, 15));
        }
    }
}
