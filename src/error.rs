/// Errors from the move oracle. Board state is never mutated on any of
/// these; the session stays in its oracle-waiting phase so the host can retry
/// or abandon the game.
///
/// Invalid or full-column moves are deliberately not represented here: they
/// are a silent no-op contract on the board, not an error condition.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    /// Transport or server failure; must never be read as a column choice.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The response arrived but could not be decoded as a column.
    #[error("malformed oracle response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OracleError::Malformed(err.to_string())
        } else {
            OracleError::Unavailable(err.to_string())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_error_display() {
        let err = OracleError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "oracle unavailable: connection refused");

        let err = OracleError::Malformed("expected integer".to_string());
        assert_eq!(err.to_string(), "malformed oracle response: expected integer");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("oracle.level must be in 1..=5".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: oracle.level must be in 1..=5"
        );
    }
}
