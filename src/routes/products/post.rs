use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction::insert_product, domain::ProductCreate, utils::{get_pooled_connection, DbPool}};

use super::ProductError;

#[tracing::instrument(
    "Creating product",
    skip(pool)
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    product: web::Json<ProductCreate>
) -> Result<HttpResponse, ProductError>{
    product.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool from within spawned task")?;

    let product = insert_product(conn, product.into_inner().into_new_product()).await?;

    Ok(HttpResponse::Ok().json(product))
}
