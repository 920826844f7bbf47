//! Async game loop
//!
//! The loop task owns the `GameState` outright. Ticks, input and spawned
//! coins are multiplexed with `select!`, and each arm runs to completion
//! before the next is polled, so a tick never interleaves with an input or
//! a spawn.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::sim::{GameEvent, GameState, InputEvent, InputOutcome, Snapshot, apply_input, tick};
use crate::spawner::Spawner;

/// Queue depth between the spawner and the loop
const SPAWN_QUEUE: usize = 16;

/// Receives a snapshot after every tick
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot);
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn present(&mut self, snapshot: &Snapshot) {
        (**self).present(snapshot);
    }
}

/// Why the loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Player chose to quit from the end screen
    Quit,
    /// Input source closed
    InputClosed,
}

/// Final state of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reason: StopReason,
    pub state: GameState,
}

/// Run a session until the player quits or input closes
///
/// Spawns the coin spawner on the current runtime; it lives as long as the
/// loop does.
pub async fn run<S: RenderSink>(
    mut state: GameState,
    mut inputs: mpsc::Receiver<InputEvent>,
    mut sink: S,
) -> RunSummary {
    let (spawn_tx, mut spawn_rx) = mpsc::channel(SPAWN_QUEUE);
    let spawner = Spawner::new(&state.config, state.seed.wrapping_add(1));
    let spawner_task = tokio::spawn(spawner.run(spawn_tx));

    let mut ticker = interval(Duration::from_millis(state.config.tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::info!(
        "Session started: {}x{} board, seed {}",
        state.config.columns,
        state.config.rows,
        state.seed
    );

    let reason = loop {
        tokio::select! {
            _ = ticker.tick() => {
                for event in tick(&mut state) {
                    log_event(&event);
                }
                sink.present(&Snapshot::capture(&state));
            }
            Some(coin) = spawn_rx.recv() => {
                if state.add_spawned_coin(coin) {
                    log::trace!("Coin spawned at ({}, {}), bonus={}", coin.pos.x, coin.pos.y, coin.bonus);
                }
            }
            input = inputs.recv() => {
                let Some(input) = input else {
                    log::info!("Input closed, stopping");
                    break StopReason::InputClosed;
                };
                match apply_input(&mut state, input) {
                    InputOutcome::Quit => {
                        log::info!("Player quit with score {}", state.player.score);
                        break StopReason::Quit;
                    }
                    InputOutcome::Restarted => {
                        log::info!("Restarted (run {})", state.restarts + 1);
                    }
                    InputOutcome::Blocked => log::debug!("{input:?} blocked by wall"),
                    InputOutcome::Moved(pos) => log::trace!("Moved to ({}, {})", pos.x, pos.y),
                    InputOutcome::Ignored => log::debug!("{input:?} ignored in {:?}", state.phase),
                }
            }
        }
    };

    spawner_task.abort();
    RunSummary { reason, state }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::BombHit { lives_left } => log::debug!("Bomb hit, {lives_left} lives left"),
        GameEvent::CoinCollected { award, bonus, .. } => {
            log::debug!("Collected {} coin (+{award})", if *bonus { "bonus" } else { "plain" })
        }
        GameEvent::Won { score } => log::info!("Won with score {score}"),
        GameEvent::Lost { score } => log::info!("Out of lives, score {score}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use tokio::time::sleep;

    use crate::settings::GameConfig;
    use crate::sim::{Coin, Direction, GamePhase, GridPosition};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Snapshot>>>);

    impl RenderSink for Recorder {
        fn present(&mut self, snapshot: &Snapshot) {
            self.0.lock().unwrap().push(snapshot.clone());
        }
    }

    impl Recorder {
        fn last(&self) -> Snapshot {
            self.0.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_win_restart_quit() {
        let mut state = GameState::empty(GameConfig::default(), 5);
        state.player.score = 2950;
        state.coins.push(Coin {
            pos: GridPosition::new(1, 0),
            bonus: true,
        });

        let (tx, rx) = mpsc::channel(8);
        let recorder = Recorder::default();
        let handle = tokio::spawn(run(state, rx, recorder.clone()));

        // The first spawned coin may already finish the run, so no
        // assertion on the phase before moving
        tx.send(InputEvent::Move(Direction::Right)).await.unwrap();
        sleep(Duration::from_millis(100)).await;

        let snap = recorder.last();
        assert_eq!(snap.phase, GamePhase::Won);
        assert!(snap.score >= 3000);
        assert!(snap.walls.is_empty() && snap.bombs.is_empty() && snap.coins.is_empty());

        tx.send(InputEvent::Confirm).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        let snap = recorder.last();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.lives, 3);
        assert!(!snap.walls.is_empty());

        // Quit only counts on the end screen
        tx.send(InputEvent::Quit).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished());

        drop(tx);
        let summary = handle.await.unwrap();
        assert_eq!(summary.reason, StopReason::InputClosed);
        assert_eq!(summary.state.restarts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_from_end_screen() {
        let mut state = GameState::empty(GameConfig::default(), 6);
        state.player.lives = 0;

        let (tx, rx) = mpsc::channel(8);
        let recorder = Recorder::default();
        let handle = tokio::spawn(run(state, rx, recorder.clone()));

        sleep(Duration::from_millis(50)).await;
        assert_eq!(recorder.last().phase, GamePhase::Lost);

        // Spawned coins are dropped on the end screen
        sleep(Duration::from_millis(2100)).await;
        assert!(recorder.last().coins.is_empty());

        tx.send(InputEvent::Quit).await.unwrap();
        let summary = handle.await.unwrap();
        assert_eq!(summary.reason, StopReason::Quit);
        assert_eq!(summary.state.phase, GamePhase::Lost);
    }
}
