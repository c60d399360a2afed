//! Win/tie detection around the most recently placed piece. The detector
//! never scans the whole board: every line that could have become a win must
//! pass through the cell that just changed.

use super::board::{Grid, COLS, ROWS};
use super::state::Status;

/// Game status after a piece has been placed at `(row, col)`. The win check
/// always runs before the tie check, so a board-filling move that completes
/// four in a row is a win, never a tie.
pub fn status_after(grid: &Grid, row: usize, col: usize) -> Status {
    let piece = grid.get(row, col);

    let connected = connected_vertical(grid, row, col)
        || connected_horizontal(grid, row, col)
        || connected_diag_down(grid, row, col)
        || connected_diag_up(grid, row, col);

    if connected {
        match piece {
            super::board::Piece::PlayerOne => Status::Win(super::Player::One),
            super::board::Piece::PlayerTwo => Status::Win(super::Player::Two),
            super::board::Piece::Empty => Status::InProgress,
        }
    } else if grid.is_full() {
        Status::Tie
    } else {
        Status::InProgress
    }
}

/// Vertical run through (row, col). Only extends downward: gravity guarantees
/// every cell above the just-placed piece was empty before this move.
fn connected_vertical(grid: &Grid, row: usize, col: usize) -> bool {
    let piece = grid.get(row, col);
    let mut count = 1;

    let mut r = row + 1;
    while r < ROWS && grid.get(r, col) == piece {
        count += 1;
        r += 1;
    }

    count >= 4
}

/// Horizontal run through (row, col), extended both ways.
fn connected_horizontal(grid: &Grid, row: usize, col: usize) -> bool {
    let piece = grid.get(row, col);
    let mut count = 1;

    let mut c = col as i32 - 1;
    while c >= 0 && grid.get(row, c as usize) == piece {
        count += 1;
        c -= 1;
    }

    let mut c = col + 1;
    while c < COLS && grid.get(row, c) == piece {
        count += 1;
        c += 1;
    }

    count >= 4
}

/// Run along the top-left to bottom-right diagonal.
fn connected_diag_down(grid: &Grid, row: usize, col: usize) -> bool {
    let piece = grid.get(row, col);
    let mut count = 1;

    let mut r = row as i32 - 1;
    let mut c = col as i32 - 1;
    while r >= 0 && c >= 0 && grid.get(r as usize, c as usize) == piece {
        count += 1;
        r -= 1;
        c -= 1;
    }

    let mut r = row + 1;
    let mut c = col + 1;
    while r < ROWS && c < COLS && grid.get(r, c) == piece {
        count += 1;
        r += 1;
        c += 1;
    }

    count >= 4
}

/// Run along the bottom-left to top-right diagonal.
fn connected_diag_up(grid: &Grid, row: usize, col: usize) -> bool {
    let piece = grid.get(row, col);
    let mut count = 1;

    let mut r = row + 1;
    let mut c = col as i32 - 1;
    while r < ROWS && c >= 0 && grid.get(r, c as usize) == piece {
        count += 1;
        r += 1;
        c -= 1;
    }

    let mut r = row as i32 - 1;
    let mut c = col + 1;
    while r >= 0 && c < COLS && grid.get(r as usize, c) == piece {
        count += 1;
        r -= 1;
        c += 1;
    }

    count >= 4
}
