//! The contract between the session and whatever draws it. The renderer is
//! an external collaborator: it only ever sees committed, read-only
//! snapshots, and must tolerate being handed the same snapshot repeatedly.

use std::io;

use crate::game::{Grid, Player, Status};
use crate::session::Phase;

/// Everything a renderer needs for one frame: the committed board, whose
/// turn it is, where the session is in its lifecycle, the frozen
/// configuration, an optional hover/preview column for the player about to
/// move, and an optional message (oracle errors surface here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub current_player: Player,
    pub status: Status,
    pub phase: Phase,
    pub human_side: Player,
    pub level: u8,
    pub candidate_column: Option<usize>,
    pub message: Option<String>,
}

/// Consumes snapshots and draws them. Redraws must be idempotent.
pub trait Renderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingRenderer;
    use super::*;
    use crate::session::{GameSession, SessionConfig};

    #[test]
    fn test_repeated_snapshots_draw_identically() {
        let mut session = GameSession::new(SessionConfig::default());
        session.start_game();
        session.human_move(3);

        let mut renderer = RecordingRenderer::default();
        let snapshot = session.snapshot();
        renderer.draw(&snapshot).unwrap();
        renderer.draw(&snapshot).unwrap();

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[0], renderer.frames[1]);
        assert_eq!(renderer.frames[0].current_player, Player::Two);
    }
}
