use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::{MoveOracle, MoveRequest};
use crate::error::OracleError;

/// Oracle that picks uniformly among open columns. Stands in when no remote
/// service is configured, and doubles as a test opponent.
pub struct RandomOracle {
    rng: Mutex<StdRng>,
}

impl RandomOracle {
    pub fn new() -> Self {
        RandomOracle {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MoveOracle for RandomOracle {
    async fn choose_move(&self, request: &MoveRequest) -> Result<usize, OracleError> {
        let open = request.open_columns();
        if open.is_empty() {
            return Err(OracleError::Malformed(
                "no open columns to choose from".to_string(),
            ));
        }

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let idx = rng.random_range(0..open.len());
        Ok(open[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardState, Player, ROWS};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_random_oracle_picks_open_column() {
        let oracle = RandomOracle::new();
        let mut board = BoardState::new();
        for _ in 0..ROWS {
            board.add_piece(3);
        }
        let request = MoveRequest::new(board.grid(), board.current_player(), Some(3), 1);

        for _ in 0..50 {
            let col = block_on(oracle.choose_move(&request)).unwrap();
            assert_ne!(col, 3, "chose a full column");
            assert!(col < 7);
        }
    }

    #[test]
    fn test_random_oracle_rejects_full_board() {
        let oracle = RandomOracle::new();
        let request = MoveRequest {
            board: vec![vec![1; 7]; 6],
            player: Player::One.code(),
            col: 6,
            level: 1,
        };
        assert!(block_on(oracle.choose_move(&request)).is_err());
    }
}
