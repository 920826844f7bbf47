//! Fixed-interval simulation tick and input handling
//!
//! Moves are applied the moment input arrives; the tick never re-applies
//! them. It only wraps, corrects and scores the position the player is on.

use serde::{Deserialize, Serialize};

use super::collision::{can_move, resolve_tick};
use super::grid::{Direction, GridPosition};
use super::ledger::{Awards, collect, evaluate_terminal};
use super::state::{GamePhase, GameState};

/// Discrete input from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Move(Direction),
    /// "Play again" on the end screen
    Confirm,
    /// "Quit" on the end screen
    Quit,
}

/// What an input did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Moved(GridPosition),
    /// A wall is in the way
    Blocked,
    Restarted,
    Quit,
    /// Not meaningful in the current phase
    Ignored,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BombHit { lives_left: u8 },
    CoinCollected { pos: GridPosition, bonus: bool, award: u64 },
    Won { score: u64 },
    Lost { score: u64 },
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // End screen: nothing to simulate
    if state.phase.is_terminal() {
        return events;
    }

    state.time_ticks += 1;

    let phase = evaluate_terminal(state.player.score, state.player.lives, state.config.win_score);
    if phase.is_terminal() {
        enter_terminal(state, phase, &mut events);
        return events;
    }

    let resolution = resolve_tick(
        state.player.pos,
        &state.walls,
        &state.bombs,
        state.config.columns,
        state.config.rows,
    );
    state.player.pos = resolution.pos;
    if resolution.hit_bomb() {
        state.player.apply_lives_delta(resolution.lives_delta);
        events.push(GameEvent::BombHit {
            lives_left: state.player.lives,
        });
    }

    let awards = Awards {
        coin: state.config.coin_award,
        bonus: state.config.bonus_award,
    };
    let collection = collect(state.player.pos, &state.coins, awards);
    if !collection.is_empty() {
        state.player.add_score(collection.score_delta);
        // Highest index first so earlier indices stay valid
        for &i in collection.collected.iter().rev() {
            let coin = state.coins.remove(i);
            events.push(GameEvent::CoinCollected {
                pos: coin.pos,
                bonus: coin.bonus,
                award: awards.for_coin(&coin),
            });
        }
    }

    events
}

fn enter_terminal(state: &mut GameState, phase: GamePhase, events: &mut Vec<GameEvent>) {
    state.phase = phase;
    state.clear_entities();
    // A move made just before this tick may still be off the board
    state.player.pos = state.player.pos.wrap(state.config.columns, state.config.rows);
    let score = state.player.score;
    events.push(match phase {
        GamePhase::Won => GameEvent::Won { score },
        _ => GameEvent::Lost { score },
    });
}

/// Apply one input immediately
///
/// While playing only moves count. On the end screen only confirm
/// (restart) and quit count, and both are always accepted.
pub fn apply_input(state: &mut GameState, input: InputEvent) -> InputOutcome {
    match (state.phase, input) {
        (GamePhase::Playing, InputEvent::Move(dir)) => {
            let delta = dir.delta();
            if can_move(state.player.pos, delta, &state.walls) {
                state.player.pos = state.player.pos.translate(delta);
                InputOutcome::Moved(state.player.pos)
            } else {
                InputOutcome::Blocked
            }
        }
        (GamePhase::Playing, _) => InputOutcome::Ignored,
        (_, InputEvent::Confirm) => {
            state.restart();
            InputOutcome::Restarted
        }
        (_, InputEvent::Quit) => InputOutcome::Quit,
        (_, InputEvent::Move(_)) => InputOutcome::Ignored,
    }
}
