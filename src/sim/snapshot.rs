//! Read-only view of a session for renderers

use serde::Serialize;

use super::grid::GridPosition;
use super::state::{Coin, GamePhase, GameState};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub columns: i32,
    pub rows: i32,
    pub tick: u64,
    pub phase: GamePhase,
    pub player: GridPosition,
    pub score: u64,
    pub lives: u8,
    pub walls: Vec<GridPosition>,
    pub bombs: Vec<GridPosition>,
    pub coins: Vec<Coin>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            columns: state.config.columns,
            rows: state.config.rows,
            tick: state.time_ticks,
            phase: state.phase,
            player: state.player.pos,
            score: state.player.score,
            lives: state.player.lives,
            walls: state.walls.iter().map(|w| w.pos).collect(),
            bombs: state.bombs.iter().map(|b| b.pos).collect(),
            coins: state.coins.clone(),
        }
    }

    /// Same frame apart from the tick counter
    pub fn same_scene(&self, other: &Snapshot) -> bool {
        self.phase == other.phase
            && self.player == other.player
            && self.score == other.score
            && self.lives == other.lives
            && self.walls == other.walls
            && self.bombs == other.bombs
            && self.coins == other.coins
    }
}
