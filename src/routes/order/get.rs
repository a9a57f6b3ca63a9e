use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::db_interaction::get_orders;
use crate::utils::{get_pooled_connection, DbPool};

use super::OrderError;

#[tracing::instrument(
    "Getting list of orders",
    skip(pool)
)]
pub async fn list_orders(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, OrderError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool from within spawned task")?;

    let orders = get_orders(conn).await?;

    Ok(HttpResponse::Ok().json(orders))
}
