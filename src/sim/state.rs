//! Game state and core simulation types
//!
//! One `GameState` is one session. Everything the rules touch lives here,
//! nothing is global, so several sessions can run side by side.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::GridPosition;
use super::placement::{create_bombs, create_walls, populate_coins};
use crate::settings::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Score threshold reached
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Won or Lost
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Playing
    }
}

/// The player avatar plus its score/lives ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: GridPosition,
    pub score: u64,
    pub lives: u8,
}

impl Player {
    pub fn new(starting_lives: u8) -> Self {
        Self {
            pos: GridPosition::ORIGIN,
            score: 0,
            lives: starting_lives,
        }
    }

    /// Apply a lives change, never going below zero
    pub fn apply_lives_delta(&mut self, delta: i8) {
        let lives = i16::from(self.lives) + i16::from(delta);
        self.lives = lives.clamp(0, i16::from(u8::MAX)) as u8;
    }

    pub fn add_score(&mut self, amount: u64) {
        self.score = self.score.saturating_add(amount);
    }
}

/// Impassable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub pos: GridPosition,
}

/// Damage tile: costs a life and sends the player home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: GridPosition,
}

/// Collectible worth `bonus_award` or `coin_award` points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: GridPosition,
    pub bonus: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the session RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub player: Player,
    pub walls: Vec<Wall>,
    pub bombs: Vec<Bomb>,
    pub coins: Vec<Coin>,
    pub phase: GamePhase,
    /// Simulation ticks run while Playing since the last (re)start
    pub time_ticks: u64,
    /// Number of restarts this session
    pub restarts: u32,
}

impl GameState {
    /// Create a session and populate the board
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self::empty(config, seed);
        state.populate();
        state
    }

    /// Create a session with no walls, bombs or coins
    ///
    /// Handy for hand-built boards.
    pub fn empty(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(config.starting_lives);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            walls: Vec::new(),
            bombs: Vec::new(),
            coins: Vec::new(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            restarts: 0,
        }
    }

    /// Place walls, bombs and the initial coins
    fn populate(&mut self) {
        let (columns, rows) = (self.config.columns, self.config.rows);
        self.walls = create_walls(&mut self.rng, self.config.num_walls, columns, rows);
        self.bombs = create_bombs(&mut self.rng, self.config.num_bombs, columns, rows);
        self.coins = populate_coins(
            &mut self.rng,
            self.config.num_coins,
            columns,
            rows,
            (self.config.bonus_odds_num, self.config.bonus_odds_den),
        );
    }

    /// Terminal entry action: the end screen shows an empty board
    pub fn clear_entities(&mut self) {
        self.walls.clear();
        self.bombs.clear();
        self.coins.clear();
    }

    /// Start a fresh run in the same session
    pub fn restart(&mut self) {
        self.player = Player::new(self.config.starting_lives);
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.restarts += 1;
        self.populate();
    }

    /// Accept a coin from the spawner
    ///
    /// Coins arriving on the end screen are dropped. Returns whether the
    /// coin was added.
    pub fn add_spawned_coin(&mut self, coin: Coin) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.coins.push(coin);
        true
    }

    pub fn is_wall(&self, pos: GridPosition) -> bool {
        self.walls.iter().any(|w| w.pos == pos)
    }

    pub fn is_bomb(&self, pos: GridPosition) -> bool {
        self.bombs.iter().any(|b| b.pos == pos)
    }
}
