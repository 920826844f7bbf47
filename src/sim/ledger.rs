//! Score and lives bookkeeping

use super::grid::GridPosition;
use super::state::{Coin, GamePhase};

/// Points per coin kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Awards {
    pub coin: u64,
    pub bonus: u64,
}

impl Awards {
    pub fn for_coin(&self, coin: &Coin) -> u64 {
        if coin.bonus { self.bonus } else { self.coin }
    }
}

/// Coins picked up this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Indices into the coin list, ascending
    pub collected: Vec<usize>,
    pub score_delta: u64,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }
}

/// Find every coin on the player's tile and total its value
///
/// Several coins may share a tile; all of them are collected.
pub fn collect(player_pos: GridPosition, coins: &[Coin], awards: Awards) -> Collection {
    coins
        .iter()
        .enumerate()
        .filter(|(_, c)| c.pos == player_pos)
        .fold(Collection::default(), |mut acc, (i, coin)| {
            acc.collected.push(i);
            acc.score_delta += awards.for_coin(coin);
            acc
        })
}

/// Decide the phase from the ledger; the win check runs first
pub fn evaluate_terminal(score: u64, lives: u8, win_score: u64) -> GamePhase {
    if score >= win_score {
        GamePhase::Won
    } else if lives == 0 {
        GamePhase::Lost
    } else {
        GamePhase::Playing
    }
}
