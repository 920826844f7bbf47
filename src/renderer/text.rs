//! Terminal text renderer
//!
//! Draws the board one character per tile on a checkered floor, with the
//! score line underneath. On the end screen only the end text is shown.

use std::io::Write;

use crate::runner::RenderSink;
use crate::sim::{GamePhase, GridPosition, Snapshot};

const FLOOR_LIGHT: char = '.';
const FLOOR_DARK: char = ':';
const COIN: char = 'o';
const BONUS_COIN: char = '$';
const PLAYER: char = '@';
const WALL: char = '#';
const BOMB: char = '*';

/// ANSI clear screen + cursor home
const CLEAR: &str = "\x1b[2J\x1b[H";

pub struct TextRenderer<W: Write> {
    out: W,
    clear_screen: bool,
    last: Option<Snapshot>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: true,
            last: None,
        }
    }

    /// Append frames instead of redrawing in place
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR.as_bytes())?;
        }
        self.out.write_all(render_frame(snapshot).as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.last.as_ref().is_some_and(|last| last.same_scene(snapshot)) {
            return;
        }
        if let Err(e) = self.draw(snapshot) {
            log::warn!("Frame dropped: {e}");
        }
        self.last = Some(snapshot.clone());
    }
}

/// Build the full text of one frame
pub fn render_frame(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        GamePhase::Playing => {
            let mut frame = render_board(snapshot);
            frame.push_str(&hud_line(snapshot));
            frame.push('\n');
            frame
        }
        phase => end_text(phase),
    }
}

/// Score line shown under the board
pub fn hud_line(snapshot: &Snapshot) -> String {
    format!("Gold - {}   Lives - {}", snapshot.score, snapshot.lives)
}

fn render_board(snapshot: &Snapshot) -> String {
    let columns = snapshot.columns.max(0) as usize;
    let rows = snapshot.rows.max(0) as usize;

    let mut tiles: Vec<Vec<char>> = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| if (row + col) % 2 == 1 { FLOOR_DARK } else { FLOOR_LIGHT })
                .collect()
        })
        .collect();

    let mut put = |pos: GridPosition, ch: char| {
        if pos.in_bounds(snapshot.columns, snapshot.rows) {
            tiles[pos.y as usize][pos.x as usize] = ch;
        }
    };

    // Later layers draw over earlier ones
    for coin in &snapshot.coins {
        put(coin.pos, if coin.bonus { BONUS_COIN } else { COIN });
    }
    for &wall in &snapshot.walls {
        put(wall, WALL);
    }
    for &bomb in &snapshot.bombs {
        put(bomb, BOMB);
    }
    // Clamp-restore can leave the player standing on a wall
    put(snapshot.player, PLAYER);

    let mut out = String::with_capacity((columns * 2 + 1) * rows);
    for row in tiles {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn end_text(phase: GamePhase) -> String {
    let headline = match phase {
        GamePhase::Won => "Congratulations, you won!",
        _ => "Sorry, you ran out of lives",
    };
    format!("{headline}\nWould you like to play again?\n(Press Y or N)\n")
}
