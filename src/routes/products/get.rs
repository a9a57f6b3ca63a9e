use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction::get_products, utils::{get_pooled_connection, DbPool}};

use super::ProductError;

#[tracing::instrument(
    "Listing products",
    skip(pool)
)]
pub async fn list_products(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ProductError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool from within spawned task")?;

    let products = get_products(conn).await?;

    Ok(HttpResponse::Ok().json(products))
}
