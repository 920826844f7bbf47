//! Coin Dash - A single-screen tile arcade game
//!
//! Core modules:
//! - `sim`: Rule engine (grid, placement, collisions, scoring, tick)
//! - `spawner`: Timed coin spawning, independent of the tick
//! - `runner`: Async game loop that owns the session
//! - `renderer`: Text/JSON render sinks
//! - `platform`: Input event parsing and stdin plumbing
//! - `settings`: Session configuration

pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod spawner;

pub use runner::{RenderSink, RunSummary, StopReason, run};
pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Board size in tiles
    pub const COLUMNS: i32 = 20;
    pub const ROWS: i32 = 15;
    /// Largest board side a config may ask for
    pub const MAX_BOARD_SIDE: i32 = 1024;

    /// Entities placed at session start
    pub const NUM_WALLS: usize = 10;
    pub const NUM_BOMBS: usize = 5;
    pub const NUM_COINS: usize = 5;

    /// Simulation tick interval (40 Hz)
    pub const TICK_INTERVAL_MS: u64 = 25;
    /// Coin spawner interval
    pub const SPAWN_INTERVAL_MS: u64 = 2000;

    /// Score at which the run is won
    pub const WIN_SCORE: u64 = 3000;
    pub const STARTING_LIVES: u8 = 3;

    /// Coin awards
    pub const BONUS_AWARD: u64 = 300;
    pub const COIN_AWARD: u64 = 50;

    /// Bonus coin odds: 2 in 11
    pub const BONUS_ODDS_NUM: u32 = 2;
    pub const BONUS_ODDS_DEN: u32 = 11;
}
