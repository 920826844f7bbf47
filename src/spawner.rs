//! Timed coin spawner
//!
//! Runs as its own task on a coarse wall-clock interval, independent of the
//! tick. It never touches the session: coins are handed to the game loop
//! over a channel and the loop decides whether to keep them.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::settings::GameConfig;
use crate::sim::{Coin, random_tile, roll_coin};

/// Produces one coin per interval
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    columns: i32,
    rows: i32,
    bonus_odds: (u32, u32),
    period: Duration,
}

impl Spawner {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            columns: config.columns,
            rows: config.rows,
            bonus_odds: (config.bonus_odds_num, config.bonus_odds_den),
            period: Duration::from_millis(config.spawn_interval_ms),
        }
    }

    /// Roll a coin at a random tile
    pub fn next_coin(&mut self) -> Coin {
        let pos = random_tile(&mut self.rng, self.columns, self.rows);
        roll_coin(&mut self.rng, pos, self.bonus_odds)
    }

    /// Send a coin every period until the receiver goes away
    ///
    /// The first coin is sent immediately.
    pub async fn run(mut self, tx: mpsc::Sender<Coin>) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let coin = self.next_coin();
            if tx.send(coin).await.is_err() {
                log::debug!("Spawner stopping: game loop closed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, sleep};

    #[test]
    fn test_coins_on_board() {
        let config = GameConfig::default();
        let mut spawner = Spawner::new(&config, 9);
        for _ in 0..200 {
            let coin = spawner.next_coin();
            assert!(coin.pos.in_bounds(config.columns, config.rows));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_cadence() {
        let config = GameConfig::default();
        let spawner = Spawner::new(&config, 4);
        let (tx, mut rx) = mpsc::channel(8);
        let start = Instant::now();
        let handle = tokio::spawn(spawner.run(tx));

        // First coin right away
        rx.recv().await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(10));

        rx.recv().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(2100), "{elapsed:?}");

        drop(rx);
        sleep(Duration::from_millis(2500)).await;
        assert!(handle.is_finished());
    }
}
