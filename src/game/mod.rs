//! Core Connect Four logic: the grid with gravity placement, win/tie
//! detection around the last move, and the board state machine.

pub mod board;
mod player;
mod state;
pub mod win;

pub use board::{Grid, Piece, COLS, ROWS};
pub use player::Player;
pub use state::{BoardState, Status};
