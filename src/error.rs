use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("placement failed: {0}")]
    Unplaceable(String),
    #[error("center of mass is undefined for an empty placement")]
    EmptyPlacement,
}

pub type PlaceResult<T> = Result<T, PlaceError>;
