mod get;
mod post;
mod update;

pub use get::*;
pub use post::*;
pub use update::*;

use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{db_interaction::OrderQueryError, utils::error_fmt_chain};

use super::detail_response;

#[derive(Error)]
pub enum OrderError{
    #[error("{0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("Failed to encode order items")]
    EncodeError(#[from] serde_json::Error),
    #[error("Failed to query orders")]
    QueryError(#[from] OrderQueryError),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for OrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            OrderError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            OrderError::QueryError(OrderQueryError::NoOrderIdError(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            // surface which id was missing
            OrderError::QueryError(e @ OrderQueryError::NoOrderIdError(_)) => {
                detail_response(self.status_code(), e)
            },
            _ => detail_response(self.status_code(), self)
        }
    }
}
