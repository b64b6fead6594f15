use rocket::figment;
use thiserror::Error;

use std::sync::PoisonError;

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("database lock poisoned: {0}")]
    Poisoned(String),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl<T> From<PoisonError<T>> for InternalError {
    fn from(e: PoisonError<T>) -> InternalError {
        InternalError::Poisoned(e.to_string())
    }
}

pub type InternalResult<T> = Result<T, InternalError>;
