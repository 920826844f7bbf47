//! Platform input layer
//!
//! Turns raw key text into `InputEvent`s and feeds them to the game loop.
//! The native build reads one key per line from stdin.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sim::{Direction, InputEvent};

/// Map a key token to an input event
///
/// Accepts WASD, arrow names, ANSI arrow escapes and Y/N (Q also quits).
/// Anything else is not a game key.
pub fn parse_key(key: &str) -> Option<InputEvent> {
    let key = key.trim();
    let event = match key {
        "\x1b[A" => InputEvent::Move(Direction::Up),
        "\x1b[B" => InputEvent::Move(Direction::Down),
        "\x1b[C" => InputEvent::Move(Direction::Right),
        "\x1b[D" => InputEvent::Move(Direction::Left),
        _ => match key.to_ascii_lowercase().as_str() {
            "w" | "up" | "k" => InputEvent::Move(Direction::Up),
            "s" | "down" | "j" => InputEvent::Move(Direction::Down),
            "a" | "left" | "h" => InputEvent::Move(Direction::Left),
            "d" | "right" | "l" => InputEvent::Move(Direction::Right),
            "y" | "yes" => InputEvent::Confirm,
            "n" | "no" | "q" | "quit" => InputEvent::Quit,
            _ => return None,
        },
    };
    Some(event)
}

/// Parse a line of keys; `"ddds"` is three rights and a down
///
/// A line that is a single token (e.g. `left` or an escape sequence) is
/// parsed whole first.
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    if let Some(event) = parse_key(line) {
        return vec![event];
    }
    line.trim()
        .chars()
        .filter_map(|c| {
            let key = c.to_string();
            let event = parse_key(&key);
            if event.is_none() && !c.is_whitespace() {
                log::debug!("Ignoring unmapped key {c:?}");
            }
            event
        })
        .collect()
}

/// Forward stdin lines to the game loop until EOF or the loop goes away
pub fn spawn_stdin_reader(tx: mpsc::Sender<InputEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("stdin read failed: {e}");
                    break;
                }
            };
            for event in parse_line(&line) {
                if tx.send(event).await.is_err() {
                    return;
                }
            }
        }
        log::debug!("stdin closed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("w"), Some(InputEvent::Move(Direction::Up)));
        assert_eq!(parse_key("Left"), Some(InputEvent::Move(Direction::Left)));
        assert_eq!(parse_key("\x1b[C"), Some(InputEvent::Move(Direction::Right)));
        assert_eq!(parse_key("Y"), Some(InputEvent::Confirm));
        assert_eq!(parse_key("n\n"), Some(InputEvent::Quit));
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("ddx s"),
            vec![
                InputEvent::Move(Direction::Right),
                InputEvent::Move(Direction::Right),
                InputEvent::Move(Direction::Down),
            ]
        );
        assert_eq!(parse_line("down"), vec![InputEvent::Move(Direction::Down)]);
        assert!(parse_line("   ").is_empty());
    }
}
