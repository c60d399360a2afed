//! The move oracle: the external service that plays the non-human side.
//! Its move-selection strength is a black box; this module only fixes the
//! request/response contract and provides two implementations — an HTTP
//! client for a remote service and an in-process random fallback.

mod http;
mod random;
mod wire;

pub use http::HttpOracle;
pub use random::RandomOracle;
pub use wire::MoveRequest;

use crate::error::OracleError;

/// A service that chooses a column for the requested player. No determinism
/// is guaranteed; identical requests may yield different columns.
#[async_trait::async_trait]
pub trait MoveOracle: Send + Sync {
    /// Choose a column for the mover in `request`. Any transport or decode
    /// failure surfaces as an [`OracleError`], never as a column.
    async fn choose_move(&self, request: &MoveRequest) -> Result<usize, OracleError>;

    /// Display name for logs and the UI.
    fn name(&self) -> &str;
}
