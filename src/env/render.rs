//! Board renderer trait.
//!
//! Renderers are pure: they turn a position and an optional set of moves to
//! highlight into text. They never mutate state and the controller never
//! consults their output for game logic.

use std::io::Write;

/// Where rendered text goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Write to stdout.
    #[default]
    Human,
    /// Return the text to the caller.
    Text,
}

/// Text renderer for one game.
pub trait Renderer: Send + Sync {
    type Position;
    type Move;

    /// Render the board, highlighting the given moves.
    fn render_text(&self, position: &Self::Position, highlights: &[Self::Move]) -> String;

    /// Short human description of a move played from `position`.
    fn describe_move(&self, position: &Self::Position, mv: &Self::Move) -> String;

    /// Render according to `mode`.
    ///
    /// Returns the text in `RenderMode::Text`, `None` after writing to stdout.
    fn render(&self, position: &Self::Position, highlights: &[Self::Move], mode: RenderMode) -> Option<String> {
        let text = self.render_text(position, highlights);
        match mode {
            RenderMode::Text => Some(text),
            RenderMode::Human => {
                let mut out = std::io::stdout().lock();
                // Spectator output only; a closed stdout must not end the episode.
                let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
                None
            }
        }
    }
}
