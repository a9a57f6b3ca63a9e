use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use thiserror::Error;

use crate::{menu_generator::{ConfigurationError, MenuGenerator}, routes::detail_response, utils::error_fmt_chain};

#[derive(Deserialize, Debug)]
pub struct GenerateConcept{
    pub concept: String
}

#[derive(Error)]
pub enum GenerateMenuError{
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError)
}

impl Debug for GenerateMenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GenerateMenuError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        detail_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Generating menu from concept",
    skip(generator)
)]
pub async fn generate_menu(
    generator: web::Data<MenuGenerator>,
    data: web::Json<GenerateConcept>
) -> Result<HttpResponse, GenerateMenuError>{
    let menu = generator.generate(&data.concept).await?;

    Ok(HttpResponse::Ok().json(menu))
}
