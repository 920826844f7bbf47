//! JSON lines renderer, one snapshot per changed frame

use std::io::Write;

use crate::runner::RenderSink;
use crate::sim::Snapshot;

pub struct JsonRenderer<W: Write> {
    out: W,
    last: Option<Snapshot>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for JsonRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.last.as_ref().is_some_and(|last| last.same_scene(snapshot)) {
            return;
        }
        if let Err(e) = self.write_line(snapshot) {
            log::warn!("Snapshot dropped: {e}");
        }
        self.last = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::GameState;

    #[test]
    fn test_one_line_per_change() {
        let mut state = GameState::empty(GameConfig::default(), 3);
        let mut renderer = JsonRenderer::new(Vec::new());

        renderer.present(&Snapshot::capture(&state));
        renderer.present(&Snapshot::capture(&state));
        state.player.lives = 2;
        renderer.present(&Snapshot::capture(&state));

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["lives"], 2);
        assert_eq!(last["phase"], "Playing");
    }
}
