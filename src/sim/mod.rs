//! Rule engine
//!
//! All gameplay logic lives here. Nothing in this module touches time,
//! threads or I/O:
//! - The tick is driven from outside at a fixed interval
//! - Randomness comes from an injected, seedable RNG
//! - Input is applied through `apply_input`, never read directly

pub mod collision;
pub mod grid;
pub mod ledger;
pub mod placement;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Resolution, can_move, resolve_tick};
pub use grid::{Direction, GridPosition};
pub use ledger::{Awards, Collection, collect, evaluate_terminal};
pub use placement::{create_bombs, create_walls, place_random, populate_coins, random_tile, roll_coin};
pub use snapshot::Snapshot;
pub use state::{Bomb, Coin, GamePhase, GameState, Player, Wall};
pub use tick::{GameEvent, InputEvent, InputOutcome, apply_input, tick};
