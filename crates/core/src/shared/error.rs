use thiserror::Error;

/// Failure taxonomy for a repair run.
///
/// `Input` and a priming-time `Decode` are fatal before any output exists.
/// Mid-stream `Decode`/`Encode` abort only the current video's run. `Io`
/// covers log and still-image persistence.
#[derive(Debug, Error)]
pub enum RepairError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
