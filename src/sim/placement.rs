//! Random entity placement
//!
//! Draws are uniform over the whole board. Entities of any kind may share a
//! tile; only walls and bombs are kept off the player's spawn tile.

use rand::Rng;

use super::grid::GridPosition;
use super::state::{Bomb, Coin, Wall};

/// Draw `count` positions, redrawing any that land on a `forbidden` tile
///
/// Terminates as long as at least one tile is not forbidden.
pub fn place_random<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    forbidden: &[GridPosition],
    columns: i32,
    rows: i32,
) -> Vec<GridPosition> {
    (0..count)
        .map(|_| loop {
            let pos = random_tile(&mut *rng, columns, rows);
            if !forbidden.contains(&pos) {
                break pos;
            }
        })
        .collect()
}

/// Uniform tile anywhere on the board
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R, columns: i32, rows: i32) -> GridPosition {
    GridPosition::new(rng.random_range(0..columns), rng.random_range(0..rows))
}

pub fn create_walls<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    columns: i32,
    rows: i32,
) -> Vec<Wall> {
    place_random(rng, count, &[GridPosition::ORIGIN], columns, rows)
        .into_iter()
        .map(|pos| Wall { pos })
        .collect()
}

pub fn create_bombs<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    columns: i32,
    rows: i32,
) -> Vec<Bomb> {
    place_random(rng, count, &[GridPosition::ORIGIN], columns, rows)
        .into_iter()
        .map(|pos| Bomb { pos })
        .collect()
}

/// Initial coins; these may land on the spawn tile
pub fn populate_coins<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    columns: i32,
    rows: i32,
    bonus_odds: (u32, u32),
) -> Vec<Coin> {
    place_random(rng, count, &[], columns, rows)
        .into_iter()
        .map(|pos| roll_coin(&mut *rng, pos, bonus_odds))
        .collect()
}

/// Make a coin at `pos`, rolling whether it is a bonus coin
///
/// `bonus_odds` is `(favorable, outcomes)`, e.g. `(2, 11)`.
pub fn roll_coin<R: Rng + ?Sized>(rng: &mut R, pos: GridPosition, bonus_odds: (u32, u32)) -> Coin {
    let (num, den) = bonus_odds;
    Coin {
        pos,
        bonus: rng.random_range(0..den) < num,
    }
}
