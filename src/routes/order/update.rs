use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde::Deserialize;

use crate::{db_interaction::update_order_status, domain::OrderStatus, utils::{get_pooled_connection, DbPool}};

use super::OrderError;

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusJson{
    pub status: OrderStatus
}

#[tracing::instrument(
    "Updating order status",
    skip(pool)
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
    json: web::Json<UpdateOrderStatusJson>
) -> Result<HttpResponse, OrderError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool from within spawned task")?;

    let order = update_order_status(conn, order_id.into_inner(), json.status).await?;

    Ok(HttpResponse::Ok().json(order))
}
