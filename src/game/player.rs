use super::board::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The piece this player places
    pub fn piece(self) -> Piece {
        match self {
            Player::One => Piece::PlayerOne,
            Player::Two => Piece::PlayerTwo,
        }
    }

    /// Wire encoding (1 or 2)
    pub fn code(self) -> u8 {
        self.piece().code()
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_piece_and_code() {
        assert_eq!(Player::One.piece(), Piece::PlayerOne);
        assert_eq!(Player::Two.piece(), Piece::PlayerTwo);
        assert_eq!(Player::One.code(), 1);
        assert_eq!(Player::Two.code(), 2);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player 1");
        assert_eq!(Player::Two.name(), "Player 2");
    }
}
