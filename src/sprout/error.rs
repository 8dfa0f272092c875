use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SproutError {
    #[error("Plant not found: {0}")]
    PlantNotFound(Uuid),

    #[error("Invalid position {position} (store holds {len} plants)")]
    InvalidPosition { position: usize, len: usize },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SproutError>;
