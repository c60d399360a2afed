use super::board::Grid;
use super::win;
use super::Player;

/// Outcome classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Tie,
    Win(Player),
}

/// The board plus everything needed to sequence a game on top of it: whose
/// turn it is, where the last piece landed, and the cached status. The only
/// mutator is [`BoardState::add_piece`]; everyone else gets read-only views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    grid: Grid,
    current_player: Player,
    last_move: Option<(usize, usize)>,
    status: Status,
}

impl BoardState {
    /// Fresh board; Player 1 moves first.
    pub fn new() -> Self {
        BoardState {
            grid: Grid::new(),
            current_player: Player::One,
            last_move: None,
            status: Status::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// `(row, column)` of the last accepted move.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Drop the current player's piece in `column`. Returns `true` if a piece
    /// was placed.
    ///
    /// A move into a full or out-of-range column, or after the game has
    /// ended, is a strict no-op: no mutation, no error. On an accepted move
    /// the status is recomputed from the landing cell, and the turn passes
    /// to the other player only while the game is still in progress.
    pub fn add_piece(&mut self, column: usize) -> bool {
        if self.is_terminal() {
            return false;
        }

        let Some(row) = self.grid.drop_piece(column, self.current_player.piece()) else {
            return false;
        };

        self.last_move = Some((row, column));
        self.status = win::status_after(&self.grid, row, column);
        if self.status == Status::InProgress {
            self.current_player = self.current_player.other();
        }

        true
    }

    /// Columns a move can currently be played in (empty when the game is
    /// over).
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid.open_columns()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
