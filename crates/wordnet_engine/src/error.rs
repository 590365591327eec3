// crates/wordnet_engine/src/error.rs
use wordnet_db::DbError;

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("wordnet database is not ready")]
    NotReady,
    #[error("wordnet engine already initialized")]
    AlreadyInitialized,
    #[error("wordnet initialization failed: {0}")]
    InitFailed(String),
    #[error("background task failed: {0}")]
    Join(String),
}

impl EngineError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::Db(e) if e.is_not_found())
    }
}

impl From<tokio::task::JoinError> for EngineError {
    fn from(e: tokio::task::JoinError) -> Self {
        EngineError::Join(e.to_string())
    }
}
