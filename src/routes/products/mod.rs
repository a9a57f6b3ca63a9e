mod get;
mod post;

pub use get::*;
pub use post::*;

use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{db_interaction::ProductQueryError, utils::error_fmt_chain};

use super::detail_response;

#[derive(Error)]
pub enum ProductError{
    #[error("{0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("Failed to query products")]
    QueryError(#[from] ProductQueryError),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProductError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        detail_response(self.status_code(), self)
    }
}
