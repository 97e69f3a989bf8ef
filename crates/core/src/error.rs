/// Errors raised at the edges of the classifier: configuration values and measurement files.
///
/// Classification itself never fails; an incomplete triad yields no result instead.
#[derive(Debug, thiserror::Error)]
pub enum AbgError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read measurement file: {0}")]
    FileRead(std::io::Error),
    #[error("translation error: {0}")]
    Translation(String),
}

pub type AbgResult<T> = std::result::Result<T, AbgError>;
