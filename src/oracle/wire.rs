//! Wire format of the oracle protocol. Field names and encodings match the
//! JSON the move service accepts: the board as a 6x7 matrix of 0/1/2, the
//! mover as 1/2, the last move column (-1 before any move), and the
//! difficulty level. The response is a bare integer column.

use serde::{Deserialize, Serialize};

use crate::game::{Grid, Player, COLS, ROWS};

/// A request for the oracle to choose a column for `player`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Vec<u8>>,
    pub player: u8,
    pub col: i32,
    pub level: u8,
}

impl MoveRequest {
    pub fn new(grid: &Grid, player: Player, last_move_column: Option<usize>, level: u8) -> Self {
        let board = (0..ROWS)
            .map(|row| (0..COLS).map(|col| grid.get(row, col).code()).collect())
            .collect();

        MoveRequest {
            board,
            player: player.code(),
            col: last_move_column.map(|c| c as i32).unwrap_or(-1),
            level,
        }
    }

    /// Columns whose top cell is still empty, read off the wire encoding.
    /// Lets oracle implementations stay independent of the board types.
    pub fn open_columns(&self) -> Vec<usize> {
        self.board
            .first()
            .map(|top| {
                top.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == 0)
                    .map(|(col, _)| col)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardState, Piece};

    #[test]
    fn test_request_json_shape() {
        let mut board = BoardState::new();
        board.add_piece(3); // Player 1
        let request = MoveRequest::new(board.grid(), board.current_player(), Some(3), 2);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["player"], 2);
        assert_eq!(json["col"], 3);
        assert_eq!(json["level"], 2);
        assert_eq!(json["board"][5][3], 1);
        assert_eq!(json["board"][0][0], 0);
        assert_eq!(json["board"][5].as_array().unwrap().len(), COLS);
        assert_eq!(json["board"].as_array().unwrap().len(), ROWS);
    }

    #[test]
    fn test_no_last_move_encodes_minus_one() {
        let board = BoardState::new();
        let request = MoveRequest::new(board.grid(), Player::One, None, 1);
        assert_eq!(request.col, -1);
    }

    #[test]
    fn test_open_columns_from_wire_board() {
        let mut grid = Grid::new();
        for _ in 0..ROWS {
            grid.drop_piece(4, Piece::PlayerTwo).unwrap();
        }
        let request = MoveRequest::new(&grid, Player::One, Some(4), 1);
        assert_eq!(request.open_columns(), vec![0, 1, 2, 3, 5, 6]);
    }
}
