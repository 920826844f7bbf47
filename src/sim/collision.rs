//! Movement validation and per-tick position resolution

use glam::IVec2;

use super::grid::GridPosition;
use super::state::{Bomb, Wall};

/// Outcome of [`resolve_tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub pos: GridPosition,
    /// 0, or -1 after a bomb hit
    pub lives_delta: i8,
}

impl Resolution {
    pub fn hit_bomb(&self) -> bool {
        self.lives_delta < 0
    }
}

/// Check whether stepping by `delta` would enter a wall
///
/// The target tile is not wrapped, so walls only block moves that stay on
/// the board.
pub fn can_move(pos: GridPosition, delta: IVec2, walls: &[Wall]) -> bool {
    let target = pos.translate(delta);
    !walls.iter().any(|w| w.pos == target)
}

/// Settle the player's position for this tick
///
/// 1. Wrap off-board coordinates to the opposite edge.
/// 2. A bomb under the wrapped tile costs a life and sends the player to
///    the origin.
/// 3. Otherwise a wall under the wrapped tile pushes the player back to the
///    edge tile it left from.
pub fn resolve_tick(
    pos: GridPosition,
    walls: &[Wall],
    bombs: &[Bomb],
    columns: i32,
    rows: i32,
) -> Resolution {
    let clamped = pos.clamp_to(columns, rows);
    let wrapped = pos.wrap(columns, rows);

    if bombs.iter().any(|b| b.pos == wrapped) {
        return Resolution {
            pos: GridPosition::ORIGIN,
            lives_delta: -1,
        };
    }

    if walls.iter().any(|w| w.pos == wrapped) {
        return Resolution {
            pos: clamped,
            lives_delta: 0,
        };
    }

    Resolution {
        pos: wrapped,
        lives_delta: 0,
    }
}
