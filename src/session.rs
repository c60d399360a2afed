//! Turn sequencing between the human and the oracle. The session is a
//! synchronous state machine; the host drives it from a single thread and
//! performs the actual oracle call elsewhere. Requests are handed out tagged
//! with a generation token and responses are only applied when the token
//! still matches, so an answer that outlives its game can never touch a
//! newer game's board.

use tracing::{debug, info, warn};

use crate::game::{BoardState, Player};
use crate::oracle::MoveRequest;
use crate::render::GameSnapshot;

/// Per-game identifier for oracle requests. Bumped on every game start and
/// every reset, which invalidates anything still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// Where the session is in its lifecycle. Exactly one of the awaiting phases
/// is active per turn, determined by which side the human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-game; side and level may be configured.
    Idle,
    AwaitingHuman,
    AwaitingOracle,
    GameOver,
}

/// Settings frozen for the duration of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Which side the human plays; the other side is the oracle's.
    pub human_side: Player,
    /// Oracle difficulty, 1..=5.
    pub level: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            human_side: Player::One,
            level: 1,
        }
    }
}

/// What became of an oracle response handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The move was placed on the board.
    Applied,
    /// The column was full or out of range; the board is unchanged and a
    /// fresh request may be issued.
    Ignored,
    /// The response belonged to an earlier game (or arrived outside an
    /// oracle turn) and was discarded.
    Stale,
}

/// One game session: the board, the frozen configuration, the phase machine,
/// and the bookkeeping for the single in-flight oracle request.
pub struct GameSession {
    board: BoardState,
    config: SessionConfig,
    phase: Phase,
    generation: Generation,
    request_in_flight: bool,
    oracle_error: Option<String>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        GameSession {
            board: BoardState::new(),
            config,
            phase: Phase::Idle,
            generation: Generation(0),
            request_in_flight: false,
            oracle_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Most recent oracle failure, cleared on the next successful response
    /// or on reset.
    pub fn oracle_error(&self) -> Option<&str> {
        self.oracle_error.as_deref()
    }

    /// Update side/level. Only honored before a game starts or after one
    /// ends; mid-game the configuration is frozen.
    pub fn configure(&mut self, config: SessionConfig) -> bool {
        match self.phase {
            Phase::Idle | Phase::GameOver => {
                self.config = config;
                true
            }
            _ => false,
        }
    }

    /// Abandon whatever is happening and return to the pre-game phase.
    /// Outstanding oracle requests are invalidated by the generation bump.
    pub fn reset(&mut self) {
        self.generation.0 += 1;
        self.board = BoardState::new();
        self.phase = Phase::Idle;
        self.request_in_flight = false;
        self.oracle_error = None;
        debug!(generation = self.generation.0, "session reset");
    }

    /// Start a game with the current configuration. Player 1 always moves
    /// first, so the opening phase depends on which side the human took.
    pub fn start_game(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }

        self.generation.0 += 1;
        self.board = BoardState::new();
        self.request_in_flight = false;
        self.oracle_error = None;
        self.phase = if self.config.human_side == Player::One {
            Phase::AwaitingHuman
        } else {
            Phase::AwaitingOracle
        };

        info!(
            generation = self.generation.0,
            human_side = self.config.human_side.name(),
            level = self.config.level,
            "game started"
        );
        true
    }

    /// Play the human's column choice. Returns `true` if a piece was placed.
    /// Outside the human's turn, or into a full column, this does nothing
    /// and the phase is unchanged.
    pub fn human_move(&mut self, column: usize) -> bool {
        if self.phase != Phase::AwaitingHuman {
            return false;
        }

        if !self.board.add_piece(column) {
            debug!(column, "human move ignored");
            return false;
        }

        debug!(column, "human move accepted");
        self.advance_phase();
        true
    }

    /// Hand out the next oracle request, tagged with the current generation.
    /// Returns `None` outside the oracle's turn or while a request is
    /// already in flight (at most one per turn).
    pub fn take_oracle_request(&mut self) -> Option<(Generation, MoveRequest)> {
        if self.phase != Phase::AwaitingOracle || self.request_in_flight {
            return None;
        }

        self.request_in_flight = true;
        let request = MoveRequest::new(
            self.board.grid(),
            self.board.current_player(),
            self.board.last_move().map(|(_, col)| col),
            self.config.level,
        );
        debug!(generation = self.generation.0, "oracle request issued");
        Some((self.generation, request))
    }

    /// Apply a column chosen by the oracle. Responses tagged with a stale
    /// generation, or arriving outside an oracle turn, are discarded without
    /// touching the board.
    pub fn apply_oracle_response(&mut self, generation: Generation, column: usize) -> ResponseOutcome {
        if generation != self.generation {
            warn!(
                response_generation = generation.0,
                current_generation = self.generation.0,
                "discarding oracle response from stale generation"
            );
            return ResponseOutcome::Stale;
        }
        if self.phase != Phase::AwaitingOracle {
            warn!(phase = ?self.phase, "discarding oracle response outside oracle turn");
            return ResponseOutcome::Stale;
        }

        self.request_in_flight = false;
        self.oracle_error = None;

        if !self.board.add_piece(column) {
            // Defect in the oracle contract: a full-column answer silently
            // fails to advance the game. The next tick may re-request.
            warn!(column, "oracle chose an unplayable column");
            return ResponseOutcome::Ignored;
        }

        debug!(column, "oracle move accepted");
        self.advance_phase();
        ResponseOutcome::Applied
    }

    /// Record an oracle failure. The board is untouched and the session
    /// stays in the oracle turn so the host can retry or reset.
    pub fn oracle_failed(&mut self, generation: Generation, message: impl Into<String>) {
        if generation != self.generation || self.phase != Phase::AwaitingOracle {
            return;
        }

        let message = message.into();
        warn!(error = %message, "oracle request failed");
        self.request_in_flight = false;
        self.oracle_error = Some(message);
    }

    /// Clear a recorded oracle failure so the host may issue the request
    /// again. Only meaningful during an oracle turn with nothing in flight.
    pub fn retry_oracle(&mut self) -> bool {
        if self.phase != Phase::AwaitingOracle || self.request_in_flight {
            return false;
        }
        self.oracle_error = None;
        true
    }

    /// Read-only view for the renderer. Safe to hand out repeatedly.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: *self.board.grid(),
            current_player: self.board.current_player(),
            status: self.board.status(),
            phase: self.phase,
            human_side: self.config.human_side,
            level: self.config.level,
            candidate_column: None,
            message: self.oracle_error.clone(),
        }
    }

    fn advance_phase(&mut self) {
        if self.board.is_terminal() {
            info!(status = ?self.board.status(), "game over");
            self.phase = Phase::GameOver;
        } else if self.board.current_player() == self.config.human_side {
            self.phase = Phase::AwaitingHuman;
        } else {
            self.phase = Phase::AwaitingOracle;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;

    fn started_session(human_side: Player) -> GameSession {
        let mut session = GameSession::new(SessionConfig {
            human_side,
            level: 2,
        });
        assert!(session.start_game());
        session
    }

    #[test]
    fn test_opening_phase_follows_human_side() {
        let session = started_session(Player::One);
        assert_eq!(session.phase(), Phase::AwaitingHuman);

        let session = started_session(Player::Two);
        assert_eq!(session.phase(), Phase::AwaitingOracle);
    }

    #[test]
    fn test_configuration_frozen_mid_game() {
        let mut session = started_session(Player::One);
        assert!(!session.configure(SessionConfig {
            human_side: Player::Two,
            level: 5,
        }));
        assert_eq!(session.config().human_side, Player::One);
        assert_eq!(session.config().level, 2);
    }

    #[test]
    fn test_configuration_accepted_when_idle_or_over() {
        let mut session = GameSession::default();
        assert!(session.configure(SessionConfig {
            human_side: Player::Two,
            level: 3,
        }));
        assert_eq!(session.config().level, 3);
    }

    #[test]
    fn test_turns_alternate_between_human_and_oracle() {
        let mut session = started_session(Player::One);

        assert!(session.human_move(3));
        assert_eq!(session.phase(), Phase::AwaitingOracle);

        let (generation, _request) = session.take_oracle_request().unwrap();
        assert_eq!(
            session.apply_oracle_response(generation, 2),
            ResponseOutcome::Applied
        );
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_human_move_rejected_during_oracle_turn() {
        let mut session = started_session(Player::Two);
        assert_eq!(session.phase(), Phase::AwaitingOracle);
        assert!(!session.human_move(3));
        assert_eq!(session.board().legal_columns().len(), 7);
    }

    #[test]
    fn test_full_column_human_move_keeps_phase() {
        let mut session = started_session(Player::One);

        // Alternate human/oracle moves until column 0 is full.
        for _ in 0..3 {
            assert!(session.human_move(0));
            let (generation, _) = session.take_oracle_request().unwrap();
            session.apply_oracle_response(generation, 0);
        }
        assert!(session.board().grid().is_column_full(0));

        assert!(!session.human_move(0));
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = started_session(Player::Two);
        let first = session.take_oracle_request();
        assert!(first.is_some());
        assert!(session.take_oracle_request().is_none());

        let (generation, _) = first.unwrap();
        session.apply_oracle_response(generation, 3);
        // Oracle plays Player 1, human is Player 2: back to the human.
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_stale_response_discarded_after_new_game() {
        let mut session = started_session(Player::Two);
        let (old_generation, _) = session.take_oracle_request().unwrap();

        // New game starts before the response arrives.
        session.reset();
        assert!(session.start_game());
        let board_before = *session.board();

        assert_eq!(
            session.apply_oracle_response(old_generation, 3),
            ResponseOutcome::Stale
        );
        assert_eq!(*session.board(), board_before);

        // The new game's own request still works.
        let (generation, _) = session.take_oracle_request().unwrap();
        assert_eq!(
            session.apply_oracle_response(generation, 3),
            ResponseOutcome::Applied
        );
    }

    #[test]
    fn test_response_outside_oracle_turn_discarded() {
        let mut session = started_session(Player::One);
        let generation = session.generation();
        assert_eq!(
            session.apply_oracle_response(generation, 3),
            ResponseOutcome::Stale
        );
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_response_after_game_over_discarded() {
        // Same generation, but the game ended before the response landed.
        let mut session = started_session(Player::One);
        for col in 0..3 {
            session.human_move(col);
            let (generation, _) = session.take_oracle_request().unwrap();
            session.apply_oracle_response(generation, 6);
        }
        session.human_move(3);
        assert_eq!(session.phase(), Phase::GameOver);

        let board_before = *session.board();
        assert_eq!(
            session.apply_oracle_response(session.generation(), 5),
            ResponseOutcome::Stale
        );
        assert_eq!(*session.board(), board_before);
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn test_unplayable_oracle_column_is_ignored_and_rerequested() {
        let mut session = started_session(Player::Two);
        let (generation, _) = session.take_oracle_request().unwrap();

        assert_eq!(
            session.apply_oracle_response(generation, 99),
            ResponseOutcome::Ignored
        );
        assert_eq!(session.phase(), Phase::AwaitingOracle);

        // The in-flight flag was cleared, so a fresh request is available.
        assert!(session.take_oracle_request().is_some());
    }

    #[test]
    fn test_oracle_failure_preserves_board_and_phase() {
        let mut session = started_session(Player::Two);
        let (generation, _) = session.take_oracle_request().unwrap();
        let board_before = *session.board();

        session.oracle_failed(generation, "connection refused");

        assert_eq!(*session.board(), board_before);
        assert_eq!(session.phase(), Phase::AwaitingOracle);
        assert_eq!(session.oracle_error(), Some("connection refused"));

        // Retry clears the failure; a success keeps it clear.
        assert!(session.retry_oracle());
        assert_eq!(session.oracle_error(), None);
        let (generation, _) = session.take_oracle_request().unwrap();
        session.apply_oracle_response(generation, 3);
        assert_eq!(session.oracle_error(), None);
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut session = started_session(Player::Two);
        let (old_generation, _) = session.take_oracle_request().unwrap();
        session.reset();
        session.start_game();

        session.oracle_failed(old_generation, "timed out");
        assert_eq!(session.oracle_error(), None);
    }

    #[test]
    fn test_game_over_reported_and_locked() {
        let mut session = started_session(Player::One);

        // Human (Player 1) builds a horizontal line on the bottom row while
        // the oracle stacks column 6.
        for col in 0..3 {
            assert!(session.human_move(col));
            let (generation, _) = session.take_oracle_request().unwrap();
            session.apply_oracle_response(generation, 6);
        }
        assert!(session.human_move(3));

        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.board().status(), Status::Win(Player::One));
        assert!(session.take_oracle_request().is_none());
        assert!(!session.human_move(0));
    }

    #[test]
    fn test_snapshot_reflects_committed_state() {
        let mut session = started_session(Player::One);
        session.human_move(3);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::AwaitingOracle);
        assert_eq!(snapshot.current_player, Player::Two);
        assert_eq!(snapshot.status, Status::InProgress);
        assert_eq!(snapshot.grid.get(5, 3), Player::One.piece());

        // Idempotent: repeated snapshots of the same state are identical.
        assert_eq!(session.snapshot().grid, snapshot.grid);
    }

    #[test]
    fn test_request_carries_board_and_level() {
        let mut session = started_session(Player::One);
        session.human_move(4);

        let (_, request) = session.take_oracle_request().unwrap();
        assert_eq!(request.player, Player::Two.code());
        assert_eq!(request.col, 4);
        assert_eq!(request.level, 2);
        assert_eq!(request.board[5][4], 1);
    }

    #[test]
    fn test_opening_oracle_request_has_no_last_move() {
        let mut session = started_session(Player::Two);
        let (_, request) = session.take_oracle_request().unwrap();
        assert_eq!(request.col, -1);
        assert_eq!(request.player, Player::One.code());
    }
}
