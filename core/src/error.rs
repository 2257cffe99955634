use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown signal token {token:?} at position {position}")]
    UnknownToken { token: char, position: usize },

    #[error("unknown signal name {0:?}")]
    UnknownSignal(String),

    #[error("invalid decoder config: {0}")]
    Config(#[from] serde_json::Error),
}
