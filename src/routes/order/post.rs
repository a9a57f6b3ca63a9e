use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction::insert_order, domain::OrderCreate, utils::{get_pooled_connection, DbPool}};

use super::OrderError;

#[tracing::instrument(
    "Posting order",
    skip(pool)
)]
pub async fn create_order(
    pool: web::Data<DbPool>,
    order: web::Json<OrderCreate>
) -> Result<HttpResponse, OrderError> {
    order.validate()?;

    let new_order = order.into_inner().into_new_order_row()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool from within spawned task")?;

    let order = insert_order(conn, new_order).await?;

    Ok(HttpResponse::Ok().json(order))
}
