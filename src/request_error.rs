use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::Request;
use thiserror::Error;
use tracing::{debug, error};

use crate::internal_error::InternalError;
use crate::todo::data::TodoID;
use crate::todo::validate::InvalidField;

/// Everything a todo handler can fail with, mapped onto a response.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Invalid(#[from] InvalidField),

    #[error("todo {0} not found")]
    NotFound(TodoID),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl<T> From<std::sync::PoisonError<T>> for RequestError {
    fn from(e: std::sync::PoisonError<T>) -> RequestError {
        RequestError::Internal(InternalError::from(e))
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            RequestError::Invalid(field) => {
                debug!(uri = %request.uri(), "rejected: {}", field);
                status::BadRequest(field.to_string()).respond_to(request)
            }
            RequestError::NotFound(todo_id) => {
                debug!(uri = %request.uri(), todo_id, "todo not found");
                status::NotFound(()).respond_to(request)
            }
            RequestError::Internal(e) => {
                error!(uri = %request.uri(), "{}", e);
                Err(Status::InternalServerError)
            }
        }
    }
}
